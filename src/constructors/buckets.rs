//! Song-pool slicing shared by every role constructor.
//!
//! All bucket bounds are expressed in 1-based round numbers, matching
//! the playlist's external indexing; internally they slice the
//! 0-based `playlist` array.

use crate::grid::card::Song;

/// `EARLY_k`: the songs callable strictly before round `k`, i.e.
/// `playlist[0..k-1]`.
pub fn early(playlist: &[Song], k: u32) -> &[Song] {
    let end = (k.saturating_sub(1) as usize).min(playlist.len());
    &playlist[..end]
}

/// `AT_k`: the song called at round `k` (1-based).
pub fn at(playlist: &[Song], k: u32) -> &Song {
    &playlist[(k - 1) as usize]
}

/// `DELAY`: songs called strictly after `r2`, strictly before `r3`
/// (`playlist[r2..r3-1]`).
pub fn delay(playlist: &[Song], r2: u32, r3: u32) -> &[Song] {
    let start = (r2 as usize).min(playlist.len());
    let end = ((r3.saturating_sub(1)) as usize).min(playlist.len());
    if start >= end {
        &[]
    } else {
        &playlist[start..end]
    }
}

/// `DELAY` variant used by role O: songs called strictly after `r2+2`,
/// strictly before `r3` (`playlist[r2+2..r3-1]`).
pub fn delay_other(playlist: &[Song], r2: u32, r3: u32) -> &[Song] {
    delay(playlist, r2 + 2, r3)
}

/// `LATE`: the blocker pool, songs called strictly after `r3`
/// (`playlist[r3..]`).
pub fn late(playlist: &[Song], r3: u32) -> &[Song] {
    let start = (r3 as usize).min(playlist.len());
    &playlist[start..]
}

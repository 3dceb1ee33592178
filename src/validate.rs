//! Target validator (C3).
//!
//! Checks are evaluated in a fixed order — ordering errors win over
//! minimum-round errors, which win over maximum/blocker-room errors.
//! Test suites rely on this ordering.

use crate::error::{BingoError, Result};
use crate::grid::card::Card;

/// `S`: how many song cells a card of size `n` holds, assuming free
/// space is used whenever `n` is odd (the validator has no
/// `free_space` parameter of its own; `generate_deck`'s own
/// `free_space` flag is what actually controls card construction).
fn song_cells(n: u32) -> u32 {
    Card::song_cell_count(n as usize, true) as u32
}

/// Validate a target triple against card size `n` and playlist length
/// `m`. Any of `r1`, `r2`, `r3` may be absent; only the checks that
/// apply to the given values run.
pub fn validate_targets(
    n: u32,
    m: u32,
    r1: Option<u32>,
    r2: Option<u32>,
    r3: Option<u32>,
) -> Result<()> {
    // 1. Ordering.
    if let (Some(a), Some(b)) = (r1, r2) {
        if a >= b {
            return Err(BingoError::Validation(
                "2nd place round must be after 1st place round".to_string(),
            ));
        }
    }
    if let (Some(b), Some(c)) = (r2, r3) {
        if b >= c {
            return Err(BingoError::Validation(
                "3rd place round must be after 2nd place round".to_string(),
            ));
        }
    }
    if let (Some(a), Some(c)) = (r1, r3) {
        if a >= c {
            return Err(BingoError::Validation(
                "3rd place round must be after 1st place round".to_string(),
            ));
        }
    }

    // 2. Minimum rounds.
    if let Some(a) = r1 {
        if a < n {
            return Err(BingoError::Validation(format!(
                "1st place round {a} is too early: need at least {n} rounds to complete a line"
            )));
        }
    }
    if let Some(b) = r2 {
        if b < 2 * n {
            return Err(BingoError::Validation(format!(
                "2nd place round {b} is too early: need at least {} rounds for two lines",
                2 * n
            )));
        }
    }
    if let Some(c) = r3 {
        let s = song_cells(n);
        if c < s {
            return Err(BingoError::Validation(format!(
                "3rd place round {c} is too early: need at least {s} rounds for a full card"
            )));
        }
    }

    // 3. Maximum.
    let max_given = [r1, r2, r3].into_iter().flatten().max();
    if let Some(max_given) = max_given {
        if max_given > m {
            return Err(BingoError::Validation(format!(
                "target rounds exceed number of songs ({m} available, round {max_given} requested)"
            )));
        }
    }

    // 4. Blocker room.
    if let Some(c) = r3 {
        if c >= m {
            return Err(BingoError::Validation(format!(
                "target rounds exceed number of songs: 3rd place round {c} leaves no song after it to block with (playlist has {m})"
            )));
        }
    }

    Ok(())
}

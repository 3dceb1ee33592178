//! Card O — every other slot: blocked from an early blackout, otherwise
//! unconstrained.

use crate::constructors::buckets::{delay_other, early, late};
use crate::constructors::{pick_empty_cell, CardBuilder};
use crate::error::{BingoError, Result};
use crate::grid::card::{Card, Song};
use crate::rng::BingoRng;

/// Build Card O: a single `LATE` blocker, one `DELAY` song per row to
/// push the typical 2-line round above r2, and an `EARLY_r3` fill.
pub fn build_card_o(
    playlist: &[Song],
    size: usize,
    free_space: bool,
    r2: u32,
    r3: u32,
    rng: &mut BingoRng,
) -> Result<Card> {
    let mut builder = CardBuilder::new(size, free_space);

    let blocker_pool = late(playlist, r3);
    if blocker_pool.is_empty() {
        return Err(BingoError::BlockerStarvation { round: r3 });
    }
    let all_empty = builder.empty_coords();
    let blocker_cell = pick_empty_cell(&all_empty, rng, r3)?;
    let blocker_song = blocker_pool[rng.index(blocker_pool.len())].clone();
    builder.place(blocker_cell.0, blocker_cell.1, blocker_song);

    let delay_pool = delay_other(playlist, r2, r3);
    if !delay_pool.is_empty() {
        for row in 0..size {
            let candidates = builder.empty_in_row(row);
            if candidates.is_empty() {
                continue;
            }
            let cell = candidates[rng.index(candidates.len())];
            let song = delay_pool[rng.index(delay_pool.len())].clone();
            builder.place(cell.0, cell.1, song);
        }
    }

    let fill_pool = early(playlist, r3);
    builder.fill_remaining_unused(fill_pool, rng);

    Ok(builder.build())
}

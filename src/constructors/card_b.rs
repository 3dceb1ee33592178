//! Card B — one line at exactly r1, blocked from an earlier blackout.

use crate::constructors::buckets::{at, early, late};
use crate::constructors::{pick_empty_cell, CardBuilder};
use crate::error::Result;
use crate::grid::card::{Card, Song};
use crate::rng::BingoRng;

/// Build Card B onto `rng`'s randomness, centered on `r1`, blocked from
/// blackout by an off-row `LATE` song guarding round `r3`.
pub fn build_card_b(
    playlist: &[Song],
    size: usize,
    free_space: bool,
    r1: u32,
    r3: u32,
    rng: &mut BingoRng,
) -> Result<Card> {
    let mut builder = CardBuilder::new(size, free_space);
    let center_row = size / 2;

    let row_cells: Vec<(usize, usize)> = builder.empty_in_row(center_row);
    let anchor = at(playlist, r1).clone();
    let early_r1: Vec<Song> = early(playlist, r1)
        .iter()
        .filter(|s| **s != anchor)
        .cloned()
        .collect();
    let early_r3: Vec<Song> = early(playlist, r3)
        .iter()
        .filter(|s| **s != anchor)
        .cloned()
        .collect();

    let need = row_cells.len().saturating_sub(1);
    let mut row_songs = rng.sample_without_replacement(&early_r1, need);
    if row_songs.len() < need {
        let used: std::collections::HashSet<&str> =
            row_songs.iter().map(String::as_str).collect();
        let padding_pool: Vec<Song> = early_r3
            .iter()
            .filter(|s| !used.contains(s.as_str()))
            .cloned()
            .collect();
        let extra = rng.sample_without_replacement(&padding_pool, need - row_songs.len());
        row_songs.extend(extra);
    }
    row_songs.push(anchor);
    rng.shuffle(&mut row_songs);

    for ((row, col), song) in row_cells.into_iter().zip(row_songs) {
        builder.place(row, col, song);
    }

    let off_row_candidates: Vec<(usize, usize)> = builder
        .empty_coords()
        .into_iter()
        .filter(|&(r, _)| r != center_row)
        .collect();
    let blocker_pool = late(playlist, r3);
    if blocker_pool.is_empty() {
        return Err(crate::error::BingoError::BlockerStarvation { round: r3 });
    }
    let blocker_cell = pick_empty_cell(&off_row_candidates, rng, r3)?;
    let blocker_song = blocker_pool[rng.index(blocker_pool.len())].clone();
    builder.place(blocker_cell.0, blocker_cell.1, blocker_song);

    let fill_pool = early(playlist, r3);
    builder.fill_remaining_unused(fill_pool, rng);

    Ok(builder.build())
}

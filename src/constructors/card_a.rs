//! Card A — blackout at exactly R.

use crate::constructors::buckets::{at, early};
use crate::constructors::retry::propose_until;
use crate::constructors::CardBuilder;
use crate::error::Result;
use crate::grid::called_set::CalledSet;
use crate::grid::card::{Card, Song};
use crate::milestone::evaluator::{count_complete_lines, is_full_card};
use crate::rng::BingoRng;

/// Retry budget for the line-avoidance acceptance predicate.
const MAX_ATTEMPTS: u32 = 100;

/// Replay `playlist` over `card` and return `(one_line, two_lines, full)`.
fn evaluate_full_history(card: &Card, playlist: &[Song]) -> (Option<u32>, Option<u32>, Option<u32>) {
    let mut called = CalledSet::new();
    let mut one_line = None;
    let mut two_lines = None;
    let mut full = None;
    for (i, song) in playlist.iter().enumerate() {
        called.insert(song);
        let round = (i + 1) as u32;
        if full.is_some() {
            break;
        }
        let (count, _) = count_complete_lines(card, &called);
        if one_line.is_none() && count >= 1 {
            one_line = Some(round);
        }
        if two_lines.is_none() && count >= 2 {
            two_lines = Some(round);
        }
        if is_full_card(card, &called) {
            full = Some(round);
        }
    }
    (one_line, two_lines, full)
}

/// Build a single candidate: sample `{AT_r3} ∪ EARLY_r3 \ {AT_r3}` down to
/// `S` songs, shuffle, and drop into the grid skipping FREE.
fn propose_candidate(playlist: &[Song], size: usize, free_space: bool, r3: u32, rng: &mut BingoRng) -> Card {
    let s = Card::song_cell_count(size, free_space);
    let anchor = at(playlist, r3).clone();
    let pool: Vec<Song> = early(playlist, r3)
        .iter()
        .filter(|s| **s != anchor)
        .cloned()
        .collect();

    let mut songs = rng.sample_without_replacement(&pool, s.saturating_sub(1));
    while songs.len() < s.saturating_sub(1) && !pool.is_empty() {
        // PoolExhaustion: pad with duplicates. Logged by the caller once
        // overall construction is known to need it.
        let i = rng.index(pool.len());
        songs.push(pool[i].clone());
    }
    songs.push(anchor);
    rng.shuffle(&mut songs);

    let mut builder = CardBuilder::new(size, free_space);
    let mut iter = songs.into_iter();
    for (row, col) in builder.empty_coords() {
        if let Some(song) = iter.next() {
            builder.place(row, col, song);
        }
    }
    builder.build()
}

/// Build Card A. Returns the card and `true` if the line-avoidance
/// thresholds were satisfied, `false` if the retry budget was exhausted
/// and the last candidate was accepted anyway as a best-effort result.
pub fn build_card_a(
    playlist: &[Song],
    size: usize,
    free_space: bool,
    r3: u32,
    rng: &mut BingoRng,
) -> Result<(Card, bool)> {
    let one_line_floor = (r3 as f64 * 0.5).floor() as u32;
    let two_lines_floor = (r3 as f64 * 0.7).floor() as u32;

    let (card, accepted) = propose_until(
        MAX_ATTEMPTS,
        rng,
        |rng| propose_candidate(playlist, size, free_space, r3, rng),
        |card| {
            let (one_line, two_lines, full) = evaluate_full_history(card, playlist);
            full == Some(r3)
                && one_line.map_or(true, |r| r > one_line_floor)
                && two_lines.map_or(true, |r| r > two_lines_floor)
        },
    );

    Ok((card, accepted))
}

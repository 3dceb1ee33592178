//! Card constructors (C4): the four role variants that select songs and
//! positions to force or block milestone completion at chosen rounds.

pub mod buckets;
pub mod card_a;
pub mod card_b;
pub mod card_c;
pub mod card_o;
pub mod retry;

use crate::error::{BingoError, Result};
use crate::grid::card::{Card, Song, FREE_SPACE};
use crate::rng::BingoRng;

/// Which constructor variant built a given deck slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Blackout at exactly R.
    A,
    /// One line at exactly r1.
    B,
    /// Two lines at exactly r2.
    C,
    /// Any other slot: blocked from an early blackout, otherwise unconstrained.
    Other,
}

/// A card under construction: `None` marks a still-empty cell.
pub(crate) struct CardBuilder {
    size: usize,
    cells: Vec<Option<Song>>,
}

impl CardBuilder {
    pub(crate) fn new(size: usize, free_space: bool) -> Self {
        let mut cells = vec![None; size * size];
        if let Some((r, c)) = Card::center(size) {
            if free_space {
                cells[r * size + c] = Some(FREE_SPACE.to_string());
            }
        }
        Self { size, cells }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, song: Song) {
        let idx = self.idx(row, col);
        self.cells[idx] = Some(song);
    }

    pub(crate) fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[self.idx(row, col)].is_none()
    }

    /// All empty cell coordinates, row-major.
    pub(crate) fn empty_coords(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|&(r, c)| self.is_empty_at(r, c))
            .collect()
    }

    /// Empty cells of a given row.
    pub(crate) fn empty_in_row(&self, row: usize) -> Vec<(usize, usize)> {
        (0..self.size)
            .map(|c| (row, c))
            .filter(|&(r, c)| self.is_empty_at(r, c))
            .collect()
    }

    /// Fill every remaining empty cell from `pool`, sampling without
    /// replacement first and falling back to uniform-random draws *with*
    /// replacement once the pool is exhausted. Returns `true` if a
    /// duplicate had to be used (a `PoolExhaustion` — a warning,
    /// not a failure).
    pub(crate) fn fill_remaining(&mut self, pool: &[Song], rng: &mut BingoRng) -> bool {
        let empties = self.empty_coords();
        if empties.is_empty() {
            return false;
        }
        let mut exhausted = false;
        let mut fresh = rng.sample_without_replacement(pool, empties.len());
        for (row, col) in empties {
            let song = if let Some(song) = fresh.pop() {
                song
            } else {
                exhausted = true;
                if pool.is_empty() {
                    // Nothing at all to draw from; leave a stable placeholder
                    // rather than panic. This cannot happen for any playlist
                    // satisfying the validator's minimum-length checks.
                    FREE_SPACE.to_string()
                } else {
                    let i = rng.index(pool.len());
                    pool[i].clone()
                }
            };
            self.place(row, col, song);
        }
        exhausted
    }

    /// Fill every remaining empty cell, preferring songs from `pool`
    /// that are not already placed anywhere on this card, and falling
    /// back to duplicates drawn from the full (unfiltered) `pool` only
    /// once that unused subset is exhausted. Returns `true` if a
    /// duplicate had to be used (a `PoolExhaustion` — a warning, not a
    /// failure).
    pub(crate) fn fill_remaining_unused(&mut self, pool: &[Song], rng: &mut BingoRng) -> bool {
        let placed: std::collections::HashSet<&str> = self
            .cells
            .iter()
            .filter_map(|c| c.as_deref())
            .filter(|s| *s != FREE_SPACE)
            .collect();
        let unused: Vec<Song> = pool
            .iter()
            .filter(|s| !placed.contains(s.as_str()))
            .cloned()
            .collect();

        let empties = self.empty_coords();
        if empties.is_empty() {
            return false;
        }
        let mut exhausted = false;
        let mut fresh = rng.sample_without_replacement(&unused, empties.len());
        for (row, col) in empties {
            let song = if let Some(song) = fresh.pop() {
                song
            } else {
                exhausted = true;
                if pool.is_empty() {
                    // Nothing at all to draw from; leave a stable placeholder
                    // rather than panic. This cannot happen for any playlist
                    // satisfying the validator's minimum-length checks.
                    FREE_SPACE.to_string()
                } else {
                    let i = rng.index(pool.len());
                    pool[i].clone()
                }
            };
            self.place(row, col, song);
        }
        exhausted
    }

    pub(crate) fn build(self) -> Card {
        let cells: Vec<Song> = self
            .cells
            .into_iter()
            .map(|c| c.unwrap_or_else(|| FREE_SPACE.to_string()))
            .collect();
        Card::new(self.size, cells)
    }
}

/// Pick one empty cell uniformly at random from `candidates`, erroring
/// with [`BingoError::BlockerStarvation`] if none exist (the chosen
/// resolution of the small-N blocker-placement Open Question).
pub(crate) fn pick_empty_cell(
    candidates: &[(usize, usize)],
    rng: &mut BingoRng,
    round: u32,
) -> Result<(usize, usize)> {
    if candidates.is_empty() {
        return Err(BingoError::BlockerStarvation { round });
    }
    Ok(candidates[rng.index(candidates.len())])
}

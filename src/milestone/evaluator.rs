//! Milestone evaluator (C2): line counting and blackout detection.
//!
//! Diagonals never count — only the N rows and N columns are lines.

use crate::grid::card::Card;
use crate::grid::called_set::CalledSet;

/// A single complete line, described by its kind and index for
/// reporting (e.g. to an operator sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Row `index` (0-origin).
    Row(usize),
    /// Column `index` (0-origin).
    Column(usize),
}

/// Count how many of a card's rows/columns are fully called, and which
/// ones. O(N^2).
pub fn count_complete_lines(card: &Card, called: &CalledSet) -> (usize, Vec<LineKind>) {
    let mut lines = Vec::new();

    for row in 0..card.size {
        if card
            .row_coords(row)
            .iter()
            .all(|&(r, c)| called.is_called(card.get(r, c)))
        {
            lines.push(LineKind::Row(row));
        }
    }

    for col in 0..card.size {
        if card
            .col_coords(col)
            .iter()
            .all(|&(r, c)| called.is_called(card.get(r, c)))
        {
            lines.push(LineKind::Column(col));
        }
    }

    (lines.len(), lines)
}

/// `true` if every cell of `card` is called (blackout).
pub fn is_full_card(card: &Card, called: &CalledSet) -> bool {
    card.coords().all(|(r, c)| called.is_called(card.get(r, c)))
}

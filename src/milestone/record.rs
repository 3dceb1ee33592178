//! Per-card milestone bookkeeping.

use serde::{Deserialize, Serialize};

/// The smallest round at which a card reached one line, two lines, and
/// blackout (full card), each absent until reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilestoneRecord {
    /// Round of first completed line, if any.
    pub one_line: Option<u32>,
    /// Round of first completed second line, if any.
    pub two_lines: Option<u32>,
    /// Round of blackout, if any.
    pub full: Option<u32>,
}

impl MilestoneRecord {
    /// A record where nothing has happened yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` iff the present milestones are non-decreasing
    /// (`one_line <= two_lines <= full`).
    pub fn is_monotone(&self) -> bool {
        let pairs = [
            (self.one_line, self.two_lines),
            (self.two_lines, self.full),
        ];
        pairs.iter().all(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => a <= b,
            _ => true,
        })
    }
}

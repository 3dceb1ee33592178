//! The three operator-chosen target rounds.

use serde::{Deserialize, Serialize};

/// `(r1, r2, r3)`: the 1-based rounds at which the 1st (one line), 2nd
/// (two lines) and 3rd (blackout) place winners are meant to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    /// Target round for the 1st place (one line).
    pub r1: u32,
    /// Target round for the 2nd place (two lines).
    pub r2: u32,
    /// Target round for the 3rd place (blackout), also written `R`.
    pub r3: u32,
}

impl Targets {
    /// Build a target triple, filling `r1`/`r2` with their default
    /// formulas when absent.
    pub fn with_defaults(n: u32, r1: Option<u32>, r2: Option<u32>, r3: u32) -> Self {
        let r1 = r1.unwrap_or_else(|| n.max((0.35 * r3 as f64).floor() as u32));
        let r2 = r2.unwrap_or_else(|| (2 * n).max((0.65 * r3 as f64).floor() as u32));
        Self { r1, r2, r3 }
    }
}

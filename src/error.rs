//! Crate-level error type.

/// Errors the core can surface to its hosts.
///
/// `PoolExhaustion` and best-effort acceptance of a sub-par Card A are
/// deliberately *not* variants here: the design treats them as non-fatal
/// quality signals, logged and reported via [`crate::deck::GenerationReport`]
/// rather than failing the whole deck request.
#[derive(Debug, thiserror::Error)]
pub enum BingoError {
    /// A target triple failed validation (see [`crate::validate::validate_targets`]).
    #[error("{0}")]
    Validation(String),

    /// Role B or C needed a blocker song from the `LATE` pool (or an
    /// off-line cell to place it on) and none was available.
    #[error("cannot place blocker for round {round}: no usable LATE song or off-line cell")]
    BlockerStarvation {
        /// The round (R) the blocker was meant to guard.
        round: u32,
    },

    /// The playlist is too short for the requested card size / roles.
    #[error("playlist too short: need at least {needed} songs, found {found}")]
    InsufficientPlaylist {
        /// Minimum songs required.
        needed: usize,
        /// Songs actually supplied.
        found: usize,
    },

    /// `N` is outside the supported `3..=7` range.
    #[error("invalid card size {0}: must be in 3..=7")]
    InvalidSize(u32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BingoError>;

//! # Music Bingo Core
//!
//! A deterministic, constraint-driven constructor and simulator of
//! music-bingo cards whose 1st (one line), 2nd (two lines), and 3rd
//! (blackout) place winners land on three operator-chosen call rounds.
//!
//! Given an ordered playlist of song names and three target rounds
//! `r1 < r2 < r3`, [`deck::generate_deck`] builds a deck of cards such
//! that, when the playlist is replayed in order via [`simulate::simulate`],
//! exactly three designated cards achieve those milestones at (or very
//! close to) `r1`, `r2`, and `r3` — and no other card achieves them
//! earlier.
//!
//! ## Usage
//!
//! ```no_run
//! use music_bingo::{deck::generate_deck, simulate::simulate, targets::Targets, rng::BingoRng};
//!
//! let playlist: Vec<String> = (1..=100).map(|i| format!("Song {i}")).collect();
//! let mut rng = BingoRng::seeded(42);
//! let targets = Targets { r1: 10, r2: 20, r3: 30 };
//! let (deck, _report) = generate_deck(&playlist, 10, 5, Some(targets), true, &mut rng).unwrap();
//! let report = simulate(&deck, &playlist, Some(targets));
//! ```

/// Card constructors: the four role variants (A/B/C/Other).
pub mod constructors;

/// Deck assembly: role dispatch and the pure-random fallback.
pub mod deck;

/// The crate's error type and `Result` alias.
pub mod error;

/// Grid primitives: card shape, FREE-cell handling, called-set.
pub mod grid;

/// Line/blackout evaluation and the per-card milestone record.
pub mod milestone;

/// Host-side playlist ingestion for the CLI demo.
pub mod playlist_io;

/// The single injectable randomness source.
pub mod rng;

/// Playlist replay and place assignment.
pub mod simulate;

/// Operator-chosen target rounds.
pub mod targets;

/// Target-triple validation.
pub mod validate;

/// Logging setup for the CLI demo (the library itself never initializes
/// a logger, only emits through `log`).
pub mod logging;

pub use deck::{generate_deck, Deck, GenerationReport};
pub use error::{BingoError, Result};
pub use grid::card::{Card, Song, FREE_SPACE};
pub use simulate::{simulate, MilestoneRow};
pub use targets::Targets;
pub use validate::validate_targets;

/// Library version, re-exported for hosts that want to display it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

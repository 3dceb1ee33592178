//! CLI demo: reads a playlist, builds a deck, simulates it, and prints
//! the operator report. This binary is a *host* of the core library —
//! it owns none of the constructor/simulator logic (see `src/lib.rs`).

use clap::Parser;
use music_bingo::logging::setup_logging;
use music_bingo::playlist_io::{read_playlist_csv, read_playlist_txt};
use music_bingo::rng::BingoRng;
use music_bingo::{generate_deck, simulate, Targets};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build and simulate a deck of music-bingo cards from a playlist.
#[derive(Parser, Debug)]
#[command(name = "music_bingo")]
struct Config {
    /// Path to the playlist: a plain-text file (one song per line) or,
    /// with `--csv`, a CSV file with a `Track Name` column.
    #[arg(short, long)]
    playlist: PathBuf,

    /// Treat `--playlist` as CSV instead of plain text.
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Number of cards to generate.
    #[arg(short = 'k', long, default_value_t = 20)]
    num_cards: u32,

    /// Card side length (3..=7).
    #[arg(short = 'n', long, default_value_t = 5)]
    size: u32,

    /// Target round for the 1st place (one line). Requires `--r2`/`--r3`.
    #[arg(long)]
    r1: Option<u32>,

    /// Target round for the 2nd place (two lines).
    #[arg(long)]
    r2: Option<u32>,

    /// Target round for the 3rd place (blackout).
    #[arg(long)]
    r3: Option<u32>,

    /// Disable the center FREE space.
    #[arg(long, default_value_t = false)]
    no_free_space: bool,

    /// RNG seed, for reproducible decks.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() -> ExitCode {
    setup_logging();
    let config = Config::parse();

    let songs = if config.csv {
        match read_playlist_csv(&config.playlist) {
            Ok(songs) => songs,
            Err(e) => {
                log::error!("failed to read CSV playlist: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match read_playlist_txt(&config.playlist) {
            Ok(songs) => songs,
            Err(e) => {
                log::error!("failed to read playlist: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let targets = match (config.r1, config.r2, config.r3) {
        (_, _, Some(r3)) => Some(Targets::with_defaults(config.size, config.r1, config.r2, r3)),
        _ => None,
    };

    let mut rng = BingoRng::seeded(config.seed);
    let (deck, report) = match generate_deck(
        &songs,
        config.num_cards,
        config.size,
        targets,
        !config.no_free_space,
        &mut rng,
    ) {
        Ok(result) => result,
        Err(e) => {
            log::error!("failed to generate deck: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !report.pool_exhausted_slots.is_empty() {
        log::warn!(
            "{} slot(s) ran out of fresh songs and used duplicates",
            report.pool_exhausted_slots.len()
        );
    }
    if let Some((slot, accepted)) = report.card_a_slot {
        if !accepted {
            log::warn!("card {slot} (blackout role) did not meet its line-avoidance thresholds after the retry budget; best-effort candidate kept");
        }
    }

    let rows = simulate(&deck, &songs, targets);

    println!("{:>5} {:>10} {:>10} {:>10} {:>6}", "Card", "1 Line", "2 Lines", "Full", "Place");
    for row in rows {
        println!(
            "{:>5} {:>10} {:>10} {:>10} {:>6}",
            row.card_index,
            fmt_round(row.milestones.one_line),
            fmt_round(row.milestones.two_lines),
            fmt_round(row.milestones.full),
            row.place.map_or("-".to_string(), |p| p.to_string()),
        );
    }

    ExitCode::SUCCESS
}

fn fmt_round(round: Option<u32>) -> String {
    round.map_or("-".to_string(), |r| r.to_string())
}

//! Deck assembler (C5): role assignment and the pure-random fallback.

use crate::constructors::buckets::early;
use crate::constructors::card_a::build_card_a;
use crate::constructors::card_b::build_card_b;
use crate::constructors::card_c::build_card_c;
use crate::constructors::card_o::build_card_o;
use crate::constructors::{CardBuilder, Role};
use crate::error::{BingoError, Result};
use crate::grid::card::{Card, Song};
use crate::rng::BingoRng;
use crate::targets::Targets;
use crate::validate::validate_targets;
use serde::{Deserialize, Serialize};

/// An ordered sequence of cards, indexed 1..=K externally. Role
/// assignment is intentionally not recoverable from this type — the
/// externally visible card indices never reveal which slot got which
/// role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// The cards, in their original slot order.
    pub cards: Vec<Card>,
}

/// Non-fatal quality signals accumulated while building a deck.
/// `PoolExhaustion` and `BestEffortAcceptance` are warnings, not
/// failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    /// 1-based slot indices where a fill pool ran out and a duplicate
    /// song had to be used.
    pub pool_exhausted_slots: Vec<u32>,
    /// 1-based slot index of Card A, and whether its line-avoidance
    /// thresholds were met (`false` means best-effort acceptance).
    pub card_a_slot: Option<(u32, bool)>,
}

/// Build a deck of `k` cards of size `n` from `playlist`. When
/// `targets` is `None`, every card is filled by independent uniform
/// random sampling; otherwise roles A/B/C/Other are assigned to three
/// distinct slots and the rest fall back to random.
pub fn generate_deck(
    playlist: &[Song],
    k: u32,
    n: u32,
    targets: Option<Targets>,
    free_space: bool,
    rng: &mut BingoRng,
) -> Result<(Deck, GenerationReport)> {
    if !(3..=7).contains(&n) {
        return Err(BingoError::InvalidSize(n));
    }

    let min_needed = Card::song_cell_count(n as usize, free_space);
    if playlist.len() < min_needed {
        return Err(BingoError::InsufficientPlaylist {
            needed: min_needed,
            found: playlist.len(),
        });
    }

    match targets {
        None => {
            let mut cards = Vec::with_capacity(k as usize);
            let mut report = GenerationReport::default();
            for slot in 0..k {
                let (card, exhausted) = generate_random_card(playlist, n as usize, free_space, rng);
                if exhausted {
                    report.pool_exhausted_slots.push(slot + 1);
                }
                cards.push(card);
            }
            Ok((Deck { cards }, report))
        }
        Some(targets) => generate_targeted_deck(playlist, k, n, targets, free_space, rng),
    }
}

fn generate_random_card(
    playlist: &[Song],
    size: usize,
    free_space: bool,
    rng: &mut BingoRng,
) -> (Card, bool) {
    let mut builder = CardBuilder::new(size, free_space);
    let exhausted = builder.fill_remaining(playlist, rng);
    (builder.build(), exhausted)
}

fn generate_targeted_deck(
    playlist: &[Song],
    k: u32,
    n: u32,
    targets: Targets,
    free_space: bool,
    rng: &mut BingoRng,
) -> Result<(Deck, GenerationReport)> {
    let m = playlist.len() as u32;
    validate_targets(n, m, Some(targets.r1), Some(targets.r2), Some(targets.r3))?;

    let slots = k as usize;
    let role_count = slots.min(3);
    let chosen_slots = rng.distinct_indices(slots, role_count);
    let roles = [Role::A, Role::B, Role::C];

    let mut role_of_slot = vec![Role::Other; slots];
    for (slot, role) in chosen_slots.into_iter().zip(roles) {
        role_of_slot[slot] = role;
    }

    let mut cards: Vec<Option<Card>> = vec![None; slots];
    let mut report = GenerationReport::default();

    for (slot, role) in role_of_slot.into_iter().enumerate() {
        let card = match role {
            Role::A => {
                let (card, accepted) =
                    build_card_a(playlist, n as usize, free_space, targets.r3, rng)?;
                report.card_a_slot = Some(((slot + 1) as u32, accepted));
                card
            }
            Role::B => build_card_b(playlist, n as usize, free_space, targets.r1, targets.r3, rng)?,
            Role::C => build_card_c(playlist, n as usize, free_space, targets.r2, targets.r3, rng)?,
            Role::Other => build_card_o(playlist, n as usize, free_space, targets.r2, targets.r3, rng)?,
        };
        cards[slot] = Some(card);
    }

    // Pool-exhaustion bookkeeping: roughly, any slot whose fill pool
    // (EARLY_r3) is smaller than its cell count. We recompute this
    // cheaply rather than threading a flag through every role builder.
    let early_r3_len = early(playlist, targets.r3).len();
    let cells_per_card = Card::song_cell_count(n as usize, free_space);
    if early_r3_len < cells_per_card {
        report.pool_exhausted_slots = (1..=k).collect();
        log::warn!(
            "EARLY_r3 pool ({early_r3_len} songs) is smaller than a card's song cells ({cells_per_card}); duplicates were used"
        );
    }

    let cards: Vec<Card> = cards.into_iter().map(|c| c.expect("every slot built")).collect();
    Ok((Deck { cards }, report))
}

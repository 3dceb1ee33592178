//! Generic "propose candidate → evaluate predicate → accept or retry"
//! helper, factoring out Card A's line-avoidance retry loop so the
//! accept/reject pattern lives in one place instead of being open-coded
//! in each role constructor.

use crate::rng::BingoRng;

/// Propose candidates via `propose` until `accept` is satisfied or
/// `attempts` proposals have been tried. Returns the last candidate
/// produced and whether it was accepted.
///
/// This never panics and never returns `None`: on budget exhaustion the
/// last candidate is still handed back under a best-effort-acceptance
/// policy — callers decide whether to log/report the `false` outcome.
pub fn propose_until<T>(
    attempts: u32,
    rng: &mut BingoRng,
    mut propose: impl FnMut(&mut BingoRng) -> T,
    accept: impl Fn(&T) -> bool,
) -> (T, bool) {
    debug_assert!(attempts > 0, "attempts budget must be positive");
    let mut candidate = propose(rng);
    for _ in 1..attempts {
        if accept(&candidate) {
            return (candidate, true);
        }
        candidate = propose(rng);
    }
    let ok = accept(&candidate);
    (candidate, ok)
}

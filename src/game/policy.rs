//! Opponent card selection.
//!
//! The automatic opponent picks from its unused in-match cards. Policies
//! are trait-based so a host can plug in something smarter; the shipped
//! policy is uniform random.

use crate::cards::Card;
use crate::core::GameRng;

/// How the opponent picks its card for a round.
pub trait OpponentPolicy: Send + Sync {
    /// Choose one of `candidates` (never empty when called by the engine).
    ///
    /// Returns the index into `candidates`, or `None` to decline.
    fn choose(&self, candidates: &[&Card], rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random pick.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose(&self, candidates: &[&Card], rng: &mut GameRng) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(rng.gen_range_usize(0..candidates.len()))
    }
}

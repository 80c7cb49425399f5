//! Battle rules.
//!
//! Pure functions over two cards: no state, no side effects. The match
//! state machine calls into these, and a UI may call them freely for
//! previews.

pub mod battle;

pub use battle::{
    determine_winner, determine_winner_with, effective_points, effective_points_with,
    BattleResult, RoundOutcome,
};

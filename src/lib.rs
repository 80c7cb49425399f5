//! # wuxing-duel
//!
//! A two-player card duel built on the Five Elements (Wu Xing).
//!
//! Each card carries one element and a point value. Elements sit on a
//! cycle: each one *generates* the next and *restricts* the one after
//! that. When two cards meet, the cycle adjusts their points before they
//! are compared.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: element relations and battle scoring are plain
//!    functions with no state.
//!
//! 2. **Event-driven matches**: a `Match` only moves when the host sends a
//!    `MatchEvent`. Timing and animation stay with the host.
//!
//! 3. **Copy-on-settle**: decks are values. Settlement returns new
//!    collections; nothing is mutated in place behind the caller's back.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration
//! - `cards`: elements and cards
//! - `decks`: decks and card transfer
//! - `rules`: battle scoring
//! - `game`: match state machine, settlement, session
//! - `storage`: deck persistence

pub mod core;
pub mod cards;
pub mod decks;
pub mod rules;
pub mod game;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MatchConfig, ScoringRules, Side, SideMap};

pub use crate::cards::{
    clockwise_distance, relationship_of, Card, CardId, Element, Relationship, RelationshipInfo,
};

pub use crate::decks::{transfer_card, Deck, DeckError};

pub use crate::rules::{
    determine_winner, determine_winner_with, effective_points, effective_points_with,
    BattleResult, RoundOutcome,
};

pub use crate::game::{
    settle_match, Match, MatchError, MatchEvent, MatchPhase, MatchState, MatchStep,
    OpponentPolicy, RoundResult, Session, SessionError, Settlement, Tally, UniformOpponent,
};

pub use crate::storage::{DeckCodec, DeckKey, DeckStore, MemoryDeckStore, StorageError};

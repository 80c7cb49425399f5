//! Core engine types: sides, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, ScoringRules};
pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};

//! Match flow: the per-match state machine, settlement, and the session
//! that ties matches to persistent collections.
//!
//! ## Key Types
//!
//! - `Match`: one match between two in-match decks, driven by `MatchEvent`s
//! - `MatchState`: phase, round counter, round log, final result
//! - `OpponentPolicy`: how the automatic opponent picks its card
//! - `settle_match`: applies a finished match to both collections
//! - `Session`: collections, saved deck choice, and the running match

pub mod error;
pub mod machine;
pub mod policy;
pub mod session;
pub mod settlement;
pub mod state;

pub use error::{MatchError, SessionError};
pub use machine::{Match, MatchEvent, MatchStep};
pub use policy::{OpponentPolicy, UniformOpponent};
pub use session::Session;
pub use settlement::{settle_match, Settlement};
pub use state::{MatchPhase, MatchState, RoundResult, Tally};

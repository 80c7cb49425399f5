//! Match and session errors.

use thiserror::Error;

use super::state::MatchPhase;
use crate::cards::CardId;
use crate::core::Side;
use crate::decks::DeckError;
use crate::storage::StorageError;

/// A match event that does not apply to the current state.
///
/// The match is left unchanged when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("event not valid in phase {actual}, expected {expected}")]
    InvalidPhase {
        expected: MatchPhase,
        actual: MatchPhase,
    },

    #[error("card {0} is not in the player's match deck")]
    UnknownCard(CardId),

    #[error("card {0} was already played this match")]
    CardAlreadyUsed(CardId),

    #[error("a card is already selected for this round")]
    AlreadySelected,

    #[error("the player has not selected a card yet")]
    NoSelection,

    #[error("the match is over")]
    MatchOver,
}

/// Session-level failures: bad deck choices, missing match, storage.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("no match in progress")]
    NoMatch,

    #[error("selected {actual} cards, a match deck needs {expected}")]
    WrongSelectionSize { expected: usize, actual: usize },

    #[error("{0} has no cards to bring into a match")]
    EmptyCollection(Side),
}

impl SessionError {
    /// Everything except corrupt stored data can be retried or corrected by the caller.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::Storage(e) => e.is_recoverable(),
            _ => true,
        }
    }
}

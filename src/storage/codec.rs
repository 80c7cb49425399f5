//! Blob encoding for stored decks.
//!
//! A stored deck is an ordered list of card records
//! (`id`, `element`, `points`). Two encodings are supported:
//! - `Bincode`: compact default
//! - `Json`: the `[{"id":..,"element":..,"points":..}]` layout browser
//!   storage used, for importing existing saves (older records spell the
//!   field `point`; both are read, `points` is written)
//!
//! Unknown element tags and duplicate ids fail at decode time.

use serde::{Deserialize, Serialize};

use super::error::StorageError;
use crate::decks::Deck;

/// Encoding used for deck blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckCodec {
    #[default]
    Bincode,
    Json,
}

impl DeckCodec {
    pub fn encode(self, deck: &Deck) -> Result<Vec<u8>, StorageError> {
        Ok(match self {
            DeckCodec::Bincode => bincode::serialize(deck)?,
            DeckCodec::Json => serde_json::to_vec(deck)?,
        })
    }

    pub fn decode(self, blob: &[u8]) -> Result<Deck, StorageError> {
        Ok(match self {
            DeckCodec::Bincode => bincode::deserialize(blob)?,
            DeckCodec::Json => serde_json::from_slice(blob)?,
        })
    }
}

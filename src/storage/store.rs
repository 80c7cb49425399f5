//! Deck persistence contract.
//!
//! The engine reads and writes decks as opaque blobs under a fixed key per
//! logical deck. Where the blobs live is up to the host application.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::StorageError;

/// Logical deck slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKey {
    /// The player's full collection.
    PlayerDeck,
    /// The opponent's full collection.
    OpponentDeck,
    /// The cards the player picked for the next match.
    SelectedGameDeck,
}

impl DeckKey {
    /// Storage key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckKey::PlayerDeck => "playerDeck",
            DeckKey::OpponentDeck => "opponentDeck",
            DeckKey::SelectedGameDeck => "selectedGameDeck",
        }
    }
}

impl std::fmt::Display for DeckKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get/set storage for deck blobs.
pub trait DeckStore {
    /// Read a blob. `Ok(None)` if nothing is stored under `key`.
    fn load(&self, key: DeckKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob under `key`.
    fn save(&mut self, key: DeckKey, blob: Vec<u8>) -> Result<(), StorageError>;

    /// Delete the blob under `key`, if any.
    fn remove(&mut self, key: DeckKey) -> Result<(), StorageError>;
}

/// In-process store, for tests and headless simulation.
#[derive(Clone, Debug, Default)]
pub struct MemoryDeckStore {
    blobs: FxHashMap<DeckKey, Vec<u8>>,
}

impl MemoryDeckStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl DeckStore for MemoryDeckStore {
    fn load(&self, key: DeckKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.blobs.get(&key).cloned())
    }

    fn save(&mut self, key: DeckKey, blob: Vec<u8>) -> Result<(), StorageError> {
        self.blobs.insert(key, blob);
        Ok(())
    }

    fn remove(&mut self, key: DeckKey) -> Result<(), StorageError> {
        self.blobs.remove(&key);
        Ok(())
    }
}

impl<S: DeckStore + ?Sized> DeckStore for &mut S {
    fn load(&self, key: DeckKey) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: DeckKey, blob: Vec<u8>) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }

    fn remove(&mut self, key: DeckKey) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

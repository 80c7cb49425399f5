//! Deck persistence.
//!
//! ## Key Types
//!
//! - `DeckStore`: get/set contract for deck blobs, implemented by the host
//! - `DeckKey`: the fixed slots (`playerDeck`, `opponentDeck`, `selectedGameDeck`)
//! - `DeckCodec`: blob encoding (bincode, or JSON for existing saves)
//! - `MemoryDeckStore`: in-process implementation

pub mod codec;
pub mod error;
pub mod store;

pub use codec::DeckCodec;
pub use error::StorageError;
pub use store::{DeckKey, DeckStore, MemoryDeckStore};

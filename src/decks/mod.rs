//! Decks and card transfer.
//!
//! ## Key Types
//!
//! - `Deck`: ordered, id-unique card collection (persistent or in-match)
//! - `transfer_card`: the only way a card changes owner

pub mod deck;
pub mod transfer;

pub use deck::{Deck, DeckError};
pub use transfer::transfer_card;

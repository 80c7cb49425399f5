//! Card system: elements and cards.
//!
//! ## Key Types
//!
//! - `Element`: the five elements and their generate/restrict cycle
//! - `CardId`: immutable string identifier
//! - `Card`: id + element + mutable points

pub mod card;
pub mod element;

pub use card::{Card, CardId, BASE_POINTS};
pub use element::{
    clockwise_distance, relationship_of, Element, ParseElementError, Relationship,
    RelationshipInfo, ELEMENT_COUNT,
};

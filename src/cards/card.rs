//! Cards: an immutable id, an element, and mutable points.

use serde::{Deserialize, Serialize};

use super::element::Element;
use crate::core::GameRng;

/// Points a card enters circulation with.
pub const BASE_POINTS: u32 = 1;

/// Stable card identifier.
///
/// All lookups and removals go through the id, never through position or
/// value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh `<element>-<suffix>` id.
    pub fn mint(element: Element, rng: &mut GameRng) -> Self {
        Self(format!("{}-{}", element.tag(), rng.id_suffix()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    pub element: Element,
    /// Older saves store this as `point`.
    #[serde(alias = "point")]
    pub points: u32,
}

impl Card {
    /// Create a card at base points.
    #[must_use]
    pub fn new(id: CardId, element: Element) -> Self {
        Self::with_points(id, element, BASE_POINTS)
    }

    /// Create a card with explicit points (restoring from storage, tests).
    #[must_use]
    pub fn with_points(id: CardId, element: Element, points: u32) -> Self {
        Self {
            id,
            element,
            points,
        }
    }

    /// Create a base card with a freshly minted id.
    pub fn mint(element: Element, rng: &mut GameRng) -> Self {
        Self::new(CardId::mint(element, rng), element)
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Does this card carry the given id?
    #[must_use]
    pub fn is(&self, id: &CardId) -> bool {
        &self.id == id
    }

    /// Reset points to base value.
    pub fn reset_points(&mut self) {
        self.points = BASE_POINTS;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.id, self.element, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_starts_at_base() {
        let card = Card::new(CardId::new("fire-1"), Element::Fire);
        assert_eq!(card.points, BASE_POINTS);
        assert_eq!(card.id().as_str(), "fire-1");
    }

    #[test]
    fn test_minted_id_format() {
        let mut rng = GameRng::new(3);
        let card = Card::mint(Element::Water, &mut rng);

        let id = card.id().as_str();
        assert!(id.starts_with("water-"));
        assert_eq!(id.len(), "water-".len() + crate::core::rng::ID_SUFFIX_LEN);
    }

    #[test]
    fn test_reset_points() {
        let mut card = Card::with_points(CardId::new("a"), Element::Earth, 6);
        card.reset_points();
        assert_eq!(card.points, 1);
    }

    #[test]
    fn test_storage_shape() {
        let card = Card::with_points(CardId::new("metal-x1"), Element::Metal, 3);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "metal-x1", "element": "metal", "points": 3})
        );
    }
}

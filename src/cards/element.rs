//! The five elements and their generate/restrict cycle.
//!
//! Elements sit on a fixed clockwise cycle:
//!
//! ```text
//! wood -> fire -> earth -> metal -> water -> wood
//! ```
//!
//! Each element *generates* the next one clockwise and *restricts* the one
//! two steps clockwise. Everything else in the rules is derived from
//! [`clockwise_distance`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// Number of elements on the cycle.
pub const ELEMENT_COUNT: usize = 5;

impl Element {
    /// All elements in declaration order (the order starter collections use).
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    /// The generative cycle, clockwise.
    pub const CYCLE: [Element; ELEMENT_COUNT] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position on the cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// The element this one generates (one step clockwise).
    #[must_use]
    pub const fn generates(self) -> Element {
        Self::CYCLE[(self.index() + 1) % ELEMENT_COUNT]
    }

    /// The element this one restricts (two steps clockwise).
    #[must_use]
    pub const fn restricts(self) -> Element {
        Self::CYCLE[(self.index() + 2) % ELEMENT_COUNT]
    }

    /// Lowercase tag, as used in card ids and storage.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Metal => "Metal",
            Element::Wood => "Wood",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown element tag.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown element tag: {0:?}")]
pub struct ParseElementError(pub String);

impl std::str::FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

/// Clockwise steps from `from` to `to`, in `0..=4`.
///
/// - 0: same element
/// - 1: `from` generates `to`
/// - 2: `from` restricts `to`
/// - 3: `from` is restricted by `to`
/// - 4: `from` is generated by `to`
#[must_use]
pub const fn clockwise_distance(from: Element, to: Element) -> u8 {
    ((to.index() + ELEMENT_COUNT - from.index()) % ELEMENT_COUNT) as u8
}

/// Descriptive relationship between two elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Generates,
    Restricts,
    Neutral,
}

/// A relationship plus its UI text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipInfo {
    pub relationship: Relationship,
    pub description: String,
}

/// Classify `from` against `to` for display.
///
/// Looks at distances 1 and 2 (what `from` does to `to`). Scoring looks at
/// the complementary distances 3 and 4; the two are not meant to agree, and
/// only scoring decides rounds.
#[must_use]
pub fn relationship_of(from: Element, to: Element) -> RelationshipInfo {
    match clockwise_distance(from, to) {
        1 => RelationshipInfo {
            relationship: Relationship::Generates,
            description: format!("{from} generates {to}, effect doubled"),
        },
        2 => RelationshipInfo {
            relationship: Relationship::Restricts,
            description: format!("{from} restricts {to}, effect halved"),
        },
        _ => RelationshipInfo {
            relationship: Relationship::Neutral,
            description: "No special relationship".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_indices_match_positions() {
        for (i, element) in Element::CYCLE.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_generates_and_restricts() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.restricts(), Element::Earth);
        assert_eq!(Element::Metal.restricts(), Element::Wood);
    }

    #[test]
    fn test_distance_table() {
        use Element::*;
        assert_eq!(clockwise_distance(Wood, Wood), 0);
        assert_eq!(clockwise_distance(Wood, Fire), 1);
        assert_eq!(clockwise_distance(Wood, Earth), 2);
        assert_eq!(clockwise_distance(Wood, Metal), 3);
        assert_eq!(clockwise_distance(Wood, Water), 4);
        assert_eq!(clockwise_distance(Fire, Wood), 4);
        assert_eq!(clockwise_distance(Water, Fire), 2);
    }

    #[test]
    fn test_distance_identities() {
        for a in Element::ALL {
            assert_eq!(clockwise_distance(a, a), 0);
            for b in Element::ALL {
                if a != b {
                    assert_eq!(clockwise_distance(a, b) + clockwise_distance(b, a), 5);
                }
            }
        }
    }

    #[test]
    fn test_relationship_of() {
        let gen = relationship_of(Element::Wood, Element::Fire);
        assert_eq!(gen.relationship, Relationship::Generates);
        assert_eq!(gen.description, "Wood generates Fire, effect doubled");

        let res = relationship_of(Element::Fire, Element::Metal);
        assert_eq!(res.relationship, Relationship::Restricts);
        assert_eq!(res.description, "Fire restricts Metal, effect halved");

        // Reverse directions are neutral for the classifier.
        assert_eq!(
            relationship_of(Element::Fire, Element::Wood).relationship,
            Relationship::Neutral
        );
        assert_eq!(
            relationship_of(Element::Earth, Element::Earth).description,
            "No special relationship"
        );
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("water".parse::<Element>(), Ok(Element::Water));
        assert_eq!("Metal".parse::<Element>(), Ok(Element::Metal));
        assert!("lightning".parse::<Element>().is_err());

        assert_eq!(serde_json::to_string(&Element::Earth).unwrap(), "\"earth\"");
        assert!(serde_json::from_str::<Element>("\"air\"").is_err());
    }
}

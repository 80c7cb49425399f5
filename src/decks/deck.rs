//! Ordered card collections.
//!
//! A `Deck` is an ordered list of cards owned by one side. It is used both
//! for a side's persistent collection and for its seven-card in-match deck.
//!
//! Card ids are unique within a deck. Construction rejects duplicates, and
//! membership only changes through [`super::transfer`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, CardId, Element};
use crate::core::GameRng;

/// Deck construction failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("duplicate card id in deck: {0}")]
    DuplicateId(CardId),

    #[error("card not in deck: {0}")]
    UnknownCard(CardId),
}

/// An ordered collection of uniquely identified cards.
///
/// ## Usage
///
/// ```
/// use wuxing_duel::cards::{Card, CardId, Element};
/// use wuxing_duel::decks::Deck;
///
/// let deck = Deck::from_cards(vec![
///     Card::new(CardId::new("wood-a"), Element::Wood),
///     Card::new(CardId::new("fire-b"), Element::Fire),
/// ])
/// .unwrap();
///
/// assert_eq!(deck.len(), 2);
/// assert!(deck.contains(&CardId::new("fire-b")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck, rejecting duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.id().clone()) {
                return Err(DeckError::DuplicateId(card.id().clone()));
            }
        }
        Ok(Self { cards })
    }

    /// A fresh collection: `copies` base cards of each element, in
    /// `Element::ALL` order, with minted ids.
    pub fn starter(copies: usize, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(copies * Element::ALL.len());
        for element in Element::ALL {
            for _ in 0..copies {
                // Re-mint on the (astronomically unlikely) suffix collision.
                let card = loop {
                    let candidate = Card::mint(element, rng);
                    if !cards.iter().any(|c| c.id() == candidate.id()) {
                        break candidate;
                    }
                };
                cards.push(card);
            }
        }
        Self { cards }
    }

    /// Copy the named cards, in the order given.
    pub fn subset(&self, ids: &[CardId]) -> Result<Deck, DeckError> {
        let cards = ids
            .iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| DeckError::UnknownCard(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Deck::from_cards(cards)
    }

    /// Copy `amount` cards chosen uniformly at random, keeping deck order.
    pub fn sample(&self, amount: usize, rng: &mut GameRng) -> Deck {
        let cards = rng
            .sample_indices(self.cards.len(), amount)
            .into_iter()
            .map(|i| self.cards[i].clone())
            .collect();
        Self { cards }
    }

    /// Copy the first `amount` cards.
    #[must_use]
    pub fn take_front(&self, amount: usize) -> Deck {
        Self {
            cards: self.cards.iter().take(amount).cloned().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(Card::id)
    }

    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.is(id))
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.is(id))
    }

    /// Sum of all card points.
    #[must_use]
    pub fn total_points(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.points)).sum()
    }

    pub(crate) fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.is(id))
    }

    /// Remove a card by id.
    pub(crate) fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Append a card. Returns `false` (and drops nothing) if the id is taken.
    pub(crate) fn push(&mut self, card: Card) -> bool {
        if self.contains(card.id()) {
            return false;
        }
        self.cards.push(card);
        true
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Deck::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, element: Element, points: u32) -> Card {
        Card::with_points(CardId::new(id), element, points)
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let result = Deck::from_cards(vec![
            card("a", Element::Wood, 1),
            card("a", Element::Fire, 2),
        ]);
        assert_eq!(result, Err(DeckError::DuplicateId(CardId::new("a"))));
    }

    #[test]
    fn test_starter_shape() {
        let mut rng = GameRng::new(42);
        let deck = Deck::starter(2, &mut rng);

        assert_eq!(deck.len(), 10);
        for element in Element::ALL {
            assert_eq!(deck.iter().filter(|c| c.element == element).count(), 2);
        }
        assert!(deck.iter().all(|c| c.points == 1));

        let ids: FxHashSet<_> = deck.ids().collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_starter_is_deterministic() {
        let a = Deck::starter(2, &mut GameRng::new(5));
        let b = Deck::starter(2, &mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_and_push() {
        let mut deck = Deck::from_cards(vec![
            card("a", Element::Wood, 1),
            card("b", Element::Fire, 1),
        ])
        .unwrap();

        let removed = deck.remove(&CardId::new("a")).unwrap();
        assert_eq!(deck.len(), 1);
        assert!(deck.remove(&CardId::new("a")).is_none());

        assert!(deck.push(removed.clone()));
        assert!(!deck.push(removed));
        assert_eq!(deck.ids().map(CardId::as_str).collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_subset_and_sample() {
        let mut rng = GameRng::new(1);
        let deck = Deck::starter(2, &mut rng);
        let ids: Vec<CardId> = deck.ids().take(3).cloned().collect();

        let sub = deck.subset(&ids).unwrap();
        assert_eq!(sub.len(), 3);
        assert!(deck
            .subset(&[CardId::new("missing")])
            .is_err());

        let sample = deck.sample(7, &mut rng);
        assert_eq!(sample.len(), 7);
        assert!(sample.ids().all(|id| deck.contains(id)));

        assert_eq!(deck.take_front(4).len(), 4);
        assert_eq!(deck.sample(20, &mut rng).len(), 10);
    }

    #[test]
    fn test_serde_rejects_duplicates() {
        let json = r#"[{"id":"a","element":"wood","points":1},{"id":"a","element":"fire","points":1}]"#;
        assert!(serde_json::from_str::<Deck>(json).is_err());

        let ok = r#"[{"id":"a","element":"wood","points":4}]"#;
        let deck: Deck = serde_json::from_str(ok).unwrap();
        assert_eq!(deck.total_points(), 4);
    }
}

//! Card ownership transfer between two decks.

use log::{debug, warn};

use super::deck::Deck;
use crate::cards::CardId;

/// Move `card` from `from` into `to` and credit `winner` in `to`.
///
/// The moved card re-enters circulation at base points and is appended to
/// the end of `to`. The winner, looked up in `to` by id, gains one point.
/// Returns the new `(from, to)` pair; the inputs are not touched.
///
/// If `card` is not in `from` (or its id already exists in `to`), both
/// decks come back unchanged. A missing winner only skips the credit.
///
/// ```
/// use wuxing_duel::cards::{Card, CardId, Element};
/// use wuxing_duel::decks::{transfer_card, Deck};
///
/// let a = Card::with_points(CardId::new("a"), Element::Wood, 3);
/// let c = Card::with_points(CardId::new("c"), Element::Fire, 2);
/// let from = Deck::from_cards(vec![a]).unwrap();
/// let to = Deck::from_cards(vec![c]).unwrap();
///
/// let (from, to) = transfer_card(&from, &to, &CardId::new("a"), &CardId::new("c"));
/// assert!(from.is_empty());
/// assert_eq!(to.get(&CardId::new("a")).unwrap().points, 1);
/// assert_eq!(to.get(&CardId::new("c")).unwrap().points, 3);
/// ```
#[must_use]
pub fn transfer_card(from: &Deck, to: &Deck, card: &CardId, winner: &CardId) -> (Deck, Deck) {
    let mut new_from = from.clone();
    let Some(mut moved) = new_from.remove(card) else {
        warn!("transfer skipped: card {card} not in source deck");
        return (from.clone(), to.clone());
    };
    if to.contains(card) {
        warn!("transfer skipped: card {card} already in destination deck");
        return (from.clone(), to.clone());
    }

    moved.reset_points();
    let mut new_to = to.clone();
    new_to.push(moved);

    if to.contains(winner) {
        if let Some(w) = new_to.get_mut(winner) {
            w.points = w.points.saturating_add(1);
            debug!("transferred {card}; {winner} now at {} points", w.points);
        }
    } else {
        debug!("transferred {card}; winner {winner} not in destination");
    }

    (new_from, new_to)
}

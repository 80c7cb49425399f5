//! End-of-match settlement.
//!
//! When a match ends, the winner of the match takes every card it beat:
//! for each round the match winner also won, the loser's card moves into
//! the winner's collection at base points and the winning card gains a
//! point. A drawn match moves nothing.

use log::info;
use serde::{Deserialize, Serialize};

use super::state::RoundResult;
use crate::cards::CardId;
use crate::core::{Side, SideMap};
use crate::decks::{transfer_card, Deck};
use crate::rules::RoundOutcome;

/// What settlement changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Match outcome from the player's point of view.
    pub outcome: RoundOutcome,
    /// Side that received cards, if any.
    pub receiver: Option<Side>,
    /// Cards that changed owner, in round order.
    pub transferred: Vec<CardId>,
    /// Winning cards that were credited a point, in round order.
    pub credited: Vec<CardId>,
}

impl Settlement {
    fn empty(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            receiver: None,
            transferred: Vec::new(),
            credited: Vec::new(),
        }
    }
}

/// Apply a finished match to both persistent collections.
///
/// Returns the new collections and a report; the inputs are not touched.
/// Rounds whose cards are no longer where they are expected are skipped.
pub fn settle_match<'a>(
    collections: &SideMap<Deck>,
    rounds: impl IntoIterator<Item = &'a RoundResult>,
    outcome: RoundOutcome,
) -> (SideMap<Deck>, Settlement) {
    let receiver = match outcome {
        RoundOutcome::Win => Side::Player,
        RoundOutcome::Lose => Side::Opponent,
        RoundOutcome::Draw => return (collections.clone(), Settlement::empty(outcome)),
    };
    let giver = receiver.other();

    let mut from = collections[giver].clone();
    let mut to = collections[receiver].clone();
    let mut report = Settlement {
        receiver: Some(receiver),
        ..Settlement::empty(outcome)
    };

    for round in rounds.into_iter().filter(|r| r.result == outcome) {
        let (lost, won) = match receiver {
            Side::Player => (round.opponent_card.id(), round.player_card.id()),
            Side::Opponent => (round.player_card.id(), round.opponent_card.id()),
        };

        let (new_from, new_to) = transfer_card(&from, &to, lost, won);
        if new_from.len() < from.len() {
            report.transferred.push(lost.clone());
            if to.contains(won) {
                report.credited.push(won.clone());
            }
        }
        from = new_from;
        to = new_to;
    }

    info!(
        "settlement: {receiver} takes {} card(s), {} credited",
        report.transferred.len(),
        report.credited.len()
    );

    let mut settled = SideMap::from_pair(Deck::new(), Deck::new());
    settled[giver] = from;
    settled[receiver] = to;
    (settled, report)
}

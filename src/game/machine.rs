//! Match state machine.
//!
//! A match runs a fixed number of rounds between two in-match decks:
//!
//! ```text
//! selection --Select(card), Advance--> reveal --Advance--> result
//!     ^                                                      |
//!     +------------------ Advance (round < rounds) ----------+
//!                                                            |
//!                         Advance (round == rounds) ---> game_end
//! ```
//!
//! The host drives it with [`MatchEvent`]s. Delays ("opponent thinking",
//! reveal and settle animations) belong to the host: it simply sends
//! `Advance` when it is ready. Dropping a `Match` at any point is safe.
//!
//! A card can be played once per match. If a side runs out of unused
//! cards before the last round, the match ends early on the rounds played.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::MatchError;
use super::policy::{OpponentPolicy, UniformOpponent};
use super::state::{MatchPhase, MatchState, RoundResult, Tally};
use crate::cards::{Card, CardId};
use crate::core::{GameRng, MatchConfig, Side, SideMap};
use crate::decks::Deck;
use crate::rules::{determine_winner_with, RoundOutcome};

type UsedCards = SmallVec<[CardId; 8]>;

/// Input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The player picks a card for this round (selection phase).
    Select(CardId),
    /// Move to the next phase.
    Advance,
}

/// What an accepted event did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStep {
    /// The player's card for this round is locked in.
    Selected { card: Card },
    /// The opponent picked; both cards are face up.
    Revealed { player_card: Card, opponent_card: Card },
    /// The round was scored and logged.
    Resolved(RoundResult),
    /// A new round started.
    NextRound { round: u32 },
    /// The match is over. `forced` is set when a side ran out of cards.
    Finished {
        outcome: RoundOutcome,
        tally: Tally,
        forced: bool,
    },
}

/// A running match.
#[derive(Clone, Debug)]
pub struct Match<P = UniformOpponent> {
    config: MatchConfig,
    decks: SideMap<Deck>,
    state: MatchState,
    selection: SideMap<Option<CardId>>,
    used: SideMap<UsedCards>,
    policy: P,
    rng: GameRng,
}

impl Match<UniformOpponent> {
    /// Start a match with a uniform-random opponent.
    #[must_use]
    pub fn new(config: MatchConfig, player_deck: Deck, opponent_deck: Deck, rng: GameRng) -> Self {
        Self::with_policy(config, player_deck, opponent_deck, UniformOpponent, rng)
    }
}

impl<P: OpponentPolicy> Match<P> {
    /// Start a match with a custom opponent policy.
    #[must_use]
    pub fn with_policy(
        config: MatchConfig,
        player_deck: Deck,
        opponent_deck: Deck,
        policy: P,
        rng: GameRng,
    ) -> Self {
        info!(
            "match start: {} rounds, {} vs {} cards",
            config.rounds,
            player_deck.len(),
            opponent_deck.len()
        );
        Self {
            config,
            decks: SideMap::from_pair(player_deck, opponent_deck),
            state: MatchState::new(),
            selection: SideMap::with_default(),
            used: SideMap::with_default(),
            policy,
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.state.tally()
    }

    /// A side's in-match deck.
    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck {
        &self.decks[side]
    }

    /// Cards a side has already played this match.
    #[must_use]
    pub fn used(&self, side: Side) -> &[CardId] {
        &self.used[side]
    }

    /// A side's card for the current round, if chosen.
    #[must_use]
    pub fn selection(&self, side: Side) -> Option<&Card> {
        self.selection[side]
            .as_ref()
            .and_then(|id| self.decks[side].get(id))
    }

    /// Cards a side may still play, in deck order.
    #[must_use]
    pub fn available(&self, side: Side) -> Vec<&Card> {
        let used = &self.used[side];
        self.decks[side]
            .iter()
            .filter(|c| !used.contains(c.id()))
            .collect()
    }

    // === Transitions ===

    /// Apply one event. On error nothing changes.
    pub fn advance(&mut self, event: MatchEvent) -> Result<MatchStep, MatchError> {
        match (self.state.phase, event) {
            (MatchPhase::GameEnd, _) => Err(MatchError::MatchOver),
            (MatchPhase::Selection, MatchEvent::Select(id)) => self.select(id),
            (MatchPhase::Selection, MatchEvent::Advance) => self.reveal(),
            (MatchPhase::Reveal, MatchEvent::Advance) => self.resolve(),
            (MatchPhase::Result, MatchEvent::Advance) => Ok(self.next_round()),
            (actual, MatchEvent::Select(_)) => Err(MatchError::InvalidPhase {
                expected: MatchPhase::Selection,
                actual,
            }),
        }
    }

    fn select(&mut self, id: CardId) -> Result<MatchStep, MatchError> {
        if self.selection[Side::Player].is_some() {
            return Err(MatchError::AlreadySelected);
        }
        let Some(card) = self.decks[Side::Player].get(&id).cloned() else {
            return Err(MatchError::UnknownCard(id));
        };
        if self.used[Side::Player].contains(&id) {
            return Err(MatchError::CardAlreadyUsed(id));
        }

        debug!("round {}: player selects {card}", self.state.round_number);
        self.selection[Side::Player] = Some(id);
        Ok(MatchStep::Selected { card })
    }

    fn reveal(&mut self) -> Result<MatchStep, MatchError> {
        if self.available(Side::Player).is_empty() {
            warn!("round {}: player has no unused cards", self.state.round_number);
            return Ok(self.finish(true));
        }
        let Some(player_card) = self.selection(Side::Player).cloned() else {
            return Err(MatchError::NoSelection);
        };

        let picked = {
            let used = &self.used[Side::Opponent];
            let candidates: Vec<&Card> = self.decks[Side::Opponent]
                .iter()
                .filter(|c| !used.contains(c.id()))
                .collect();
            self.policy
                .choose(&candidates, &mut self.rng)
                .and_then(|i| candidates.get(i).map(|c| (*c).clone()))
        };
        let Some(opponent_card) = picked else {
            warn!("round {}: opponent has no card to play", self.state.round_number);
            return Ok(self.finish(true));
        };

        debug!("round {}: opponent picks {opponent_card}", self.state.round_number);
        self.selection[Side::Opponent] = Some(opponent_card.id().clone());
        self.state.phase = MatchPhase::Reveal;
        Ok(MatchStep::Revealed {
            player_card,
            opponent_card,
        })
    }

    fn resolve(&mut self) -> Result<MatchStep, MatchError> {
        let (Some(player_card), Some(opponent_card)) = (
            self.selection(Side::Player).cloned(),
            self.selection(Side::Opponent).cloned(),
        ) else {
            return Err(MatchError::NoSelection);
        };

        let battle = determine_winner_with(&self.config.scoring, &player_card, &opponent_card);
        let round = RoundResult::new(self.state.round_number, player_card, opponent_card, battle);
        debug!(
            "round {}: {} vs {} -> {} ({} vs {})",
            round.round,
            round.player_card,
            round.opponent_card,
            round.result,
            round.player_effective_points,
            round.opponent_effective_points
        );

        self.used[Side::Player].push(round.player_card.id().clone());
        self.used[Side::Opponent].push(round.opponent_card.id().clone());
        self.state.round_results.push_back(round.clone());
        self.state.phase = MatchPhase::Result;
        Ok(MatchStep::Resolved(round))
    }

    fn next_round(&mut self) -> MatchStep {
        if self.state.round_number >= self.config.rounds {
            return self.finish(false);
        }
        self.state.round_number += 1;
        self.selection = SideMap::with_default();
        self.state.phase = MatchPhase::Selection;
        MatchStep::NextRound {
            round: self.state.round_number,
        }
    }

    fn finish(&mut self, forced: bool) -> MatchStep {
        let tally = self.state.tally();
        let outcome = tally.outcome();

        self.selection = SideMap::with_default();
        self.state.phase = MatchPhase::GameEnd;
        self.state.final_result = Some(outcome);
        info!(
            "match end: {outcome} ({} wins, {} losses, {} draws{})",
            tally.wins,
            tally.losses,
            tally.draws,
            if forced { ", ended early" } else { "" }
        );
        MatchStep::Finished {
            outcome,
            tally,
            forced,
        }
    }
}

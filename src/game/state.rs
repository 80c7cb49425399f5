//! Match state: round counter, phase, round log, final result.
//!
//! `MatchState` is the observable part of a running match. It is cheap to
//! clone (the round log is an `im::Vector`) so a UI can keep snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{BattleResult, RoundOutcome};

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPhase {
    /// Waiting for the player's card (and then the opponent's pick).
    Selection,
    /// Both cards are face up, not yet scored.
    Reveal,
    /// The round is scored and logged.
    Result,
    /// Terminal.
    GameEnd,
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchPhase::Selection => "selection",
            MatchPhase::Reveal => "reveal",
            MatchPhase::Result => "result",
            MatchPhase::GameEnd => "gameEnd",
        };
        f.write_str(name)
    }
}

/// One logged round. Card fields are snapshots taken at reveal time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub player_card: Card,
    pub opponent_card: Card,
    pub result: RoundOutcome,
    pub player_effective_points: u32,
    pub opponent_effective_points: u32,
}

impl RoundResult {
    pub(crate) fn new(round: u32, player_card: Card, opponent_card: Card, battle: BattleResult) -> Self {
        Self {
            round,
            player_card,
            opponent_card,
            result: battle.outcome,
            player_effective_points: battle.player_effective_points,
            opponent_effective_points: battle.opponent_effective_points,
        }
    }
}

/// Win/loss/draw counts over a round log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn from_rounds<'a>(rounds: impl IntoIterator<Item = &'a RoundResult>) -> Self {
        rounds.into_iter().fold(Self::default(), |mut tally, round| {
            match round.result {
                RoundOutcome::Win => tally.wins += 1,
                RoundOutcome::Lose => tally.losses += 1,
                RoundOutcome::Draw => tally.draws += 1,
            }
            tally
        })
    }

    /// Aggregate match outcome: more wins than losses wins, and so on.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::from_scores(self.wins, self.losses)
    }
}

/// Observable match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Current round, starting at 1.
    pub round_number: u32,

    pub phase: MatchPhase,

    /// Logged rounds, in order.
    pub round_results: Vector<RoundResult>,

    /// Set once the match reaches `GameEnd`.
    pub final_result: Option<RoundOutcome>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh state: round 1, selection phase, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round_number: 1,
            phase: MatchPhase::Selection,
            round_results: Vector::new(),
            final_result: None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameEnd
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally::from_rounds(&self.round_results)
    }
}

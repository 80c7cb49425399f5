//! Battle resolution: effective points and round outcome.
//!
//! Each card is scored against the other by looking at the clockwise
//! distance from its own element to the opponent's:
//!
//! | distance | meaning              | effective points                      |
//! |----------|----------------------|---------------------------------------|
//! | 4        | opponent generates it| `points + swing(opponent)`            |
//! | 3        | opponent restricts it| `max(points - swing(opponent), 0)`    |
//! | 0        | same element         | `points + opponent.points`            |
//! | 1, 2     | -                    | `points`                              |
//!
//! where `swing(p) = ceil(p / 3) * 2` under the standard rules.
//!
//! Both directions are measured independently, so swapping the two cards
//! is not guaranteed to flip the outcome.

use serde::{Deserialize, Serialize};

use crate::cards::{clockwise_distance, Card};
use crate::core::ScoringRules;

/// Outcome of a round (or a match), from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// The same outcome seen from the other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    /// Compare two scores.
    #[must_use]
    pub fn from_scores(player: u32, opponent: u32) -> Self {
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => RoundOutcome::Win,
            std::cmp::Ordering::Less => RoundOutcome::Lose,
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Win => write!(f, "win"),
            RoundOutcome::Lose => write!(f, "lose"),
            RoundOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Outcome plus both effective scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub outcome: RoundOutcome,
    pub player_effective_points: u32,
    pub opponent_effective_points: u32,
}

/// Effective points of `card` against `opponent` under the standard rules.
#[must_use]
pub fn effective_points(card: &Card, opponent: &Card) -> u32 {
    effective_points_with(&ScoringRules::STANDARD, card, opponent)
}

/// Effective points of `card` against `opponent` under `rules`.
#[must_use]
pub fn effective_points_with(rules: &ScoringRules, card: &Card, opponent: &Card) -> u32 {
    match clockwise_distance(card.element, opponent.element) {
        4 => card.points.saturating_add(rules.swing(opponent.points)),
        3 => card.points.saturating_sub(rules.swing(opponent.points)),
        0 => card.points.saturating_add(opponent.points),
        _ => card.points,
    }
}

/// Resolve a round under the standard rules.
#[must_use]
pub fn determine_winner(player: &Card, opponent: &Card) -> BattleResult {
    determine_winner_with(&ScoringRules::STANDARD, player, opponent)
}

/// Resolve a round under `rules`. Pure; safe to call for previews.
#[must_use]
pub fn determine_winner_with(rules: &ScoringRules, player: &Card, opponent: &Card) -> BattleResult {
    let player_effective_points = effective_points_with(rules, player, opponent);
    let opponent_effective_points = effective_points_with(rules, opponent, player);

    BattleResult {
        outcome: RoundOutcome::from_scores(player_effective_points, opponent_effective_points),
        player_effective_points,
        opponent_effective_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Element};

    fn card(element: Element, points: u32) -> Card {
        Card::with_points(CardId::new(element.tag()), element, points)
    }

    #[test]
    fn test_supported_branch() {
        // Water generates wood: wood -> water is distance 4.
        assert_eq!(effective_points(&card(Element::Wood, 1), &card(Element::Water, 1)), 3);
        assert_eq!(effective_points(&card(Element::Wood, 2), &card(Element::Water, 4)), 6);
    }

    #[test]
    fn test_suppressed_branch_clamps() {
        // Metal restricts wood: wood -> metal is distance 3.
        assert_eq!(effective_points(&card(Element::Wood, 1), &card(Element::Metal, 1)), 0);
        assert_eq!(effective_points(&card(Element::Wood, 5), &card(Element::Metal, 3)), 3);
    }

    #[test]
    fn test_neutral_branches() {
        assert_eq!(effective_points(&card(Element::Wood, 2), &card(Element::Fire, 9)), 2);
        assert_eq!(effective_points(&card(Element::Wood, 2), &card(Element::Earth, 9)), 2);
    }

    #[test]
    fn test_wood_vs_fire() {
        let result = determine_winner(&card(Element::Wood, 1), &card(Element::Fire, 1));
        assert_eq!(result.player_effective_points, 1);
        assert_eq!(result.opponent_effective_points, 3);
        assert_eq!(result.outcome, RoundOutcome::Lose);
    }

    #[test]
    fn test_same_element_draw() {
        let result = determine_winner(&card(Element::Earth, 2), &card(Element::Earth, 3));
        assert_eq!(result.player_effective_points, 5);
        assert_eq!(result.opponent_effective_points, 5);
        assert_eq!(result.outcome, RoundOutcome::Draw);
    }

    #[test]
    fn test_self_comparison_draws() {
        let c = card(Element::Metal, 4);
        assert_eq!(determine_winner(&c, &c).outcome, RoundOutcome::Draw);
    }

    #[test]
    fn test_legacy_rules() {
        let result = determine_winner_with(
            &ScoringRules::LEGACY,
            &card(Element::Wood, 1),
            &card(Element::Fire, 1),
        );
        assert_eq!(result.opponent_effective_points, 5);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(RoundOutcome::Win.flip(), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::Draw.flip(), RoundOutcome::Draw);
        assert_eq!(RoundOutcome::from_scores(2, 1), RoundOutcome::Win);
        assert_eq!(RoundOutcome::Lose.to_string(), "lose");
    }
}

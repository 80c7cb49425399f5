//! Property tests for element distance, scoring and transfer.

use proptest::prelude::*;

use wuxing_duel::cards::{clockwise_distance, Card, CardId, Element};
use wuxing_duel::core::ScoringRules;
use wuxing_duel::decks::{transfer_card, Deck};
use wuxing_duel::rules::{determine_winner, determine_winner_with, effective_points, RoundOutcome};

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn card(prefix: &'static str) -> impl Strategy<Value = Card> {
    (element(), 0u32..100).prop_map(move |(e, points)| {
        Card::with_points(CardId::new(format!("{prefix}-{}", e.tag())), e, points)
    })
}

/// A deck of up to `max` cards with ids `{prefix}0..`.
fn deck(prefix: &'static str, max: usize) -> impl Strategy<Value = Deck> {
    prop::collection::vec((element(), 1u32..10), 0..max).prop_map(move |specs| {
        let cards = specs
            .into_iter()
            .enumerate()
            .map(|(i, (e, p))| Card::with_points(CardId::new(format!("{prefix}{i}")), e, p))
            .collect();
        Deck::from_cards(cards).expect("ids are unique")
    })
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(e in element()) {
        prop_assert_eq!(clockwise_distance(e, e), 0);
    }

    #[test]
    fn distances_sum_to_cycle_length(a in element(), b in element()) {
        prop_assume!(a != b);
        prop_assert_eq!(clockwise_distance(a, b) + clockwise_distance(b, a), 5);
    }

    #[test]
    fn generate_and_restrict_distances(e in element()) {
        prop_assert_eq!(clockwise_distance(e, e.generates()), 1);
        prop_assert_eq!(clockwise_distance(e, e.restricts()), 2);
    }

    #[test]
    fn effective_points_in_bounds(a in card("a"), b in card("b")) {
        let points = effective_points(&a, &b);
        // never above own points plus the largest bonus
        prop_assert!(points <= a.points + b.points.max(b.points.div_ceil(3) * 2));
    }

    /// Role swap mirrors scores and flips the outcome for every pair.
    #[test]
    fn role_swap_mirrors_result(a in card("a"), b in card("b")) {
        let forward = determine_winner(&a, &b);
        let backward = determine_winner(&b, &a);

        prop_assert_eq!(forward.player_effective_points, backward.opponent_effective_points);
        prop_assert_eq!(forward.opponent_effective_points, backward.player_effective_points);
        prop_assert_eq!(forward.outcome, backward.outcome.flip());
    }

    #[test]
    fn legacy_rules_swing_harder(a in card("a"), b in card("b")) {
        let standard = determine_winner_with(&ScoringRules::STANDARD, &a, &b);
        let legacy = determine_winner_with(&ScoringRules::LEGACY, &a, &b);
        if clockwise_distance(a.element, b.element) == 4 && b.points > 0 {
            prop_assert!(legacy.player_effective_points >= standard.player_effective_points);
        }
    }

    #[test]
    fn transfer_conserves_count(
        from in deck("f", 8),
        to in deck("t", 8),
        pick in any::<prop::sample::Index>(),
        win in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!from.is_empty() && !to.is_empty());
        let lost = from.cards()[pick.index(from.len())].id().clone();
        let winner = to.cards()[win.index(to.len())].id().clone();

        let (new_from, new_to) = transfer_card(&from, &to, &lost, &winner);

        prop_assert_eq!(new_from.len() + new_to.len(), from.len() + to.len());
        prop_assert_eq!(new_from.len() + 1, from.len());
        prop_assert_eq!(new_to.get(&lost).map(|c| c.points), Some(1));
        prop_assert_eq!(
            new_to.get(&winner).map(|c| c.points),
            to.get(&winner).map(|c| c.points + 1)
        );
    }

    #[test]
    fn transfer_of_non_member_is_noop(from in deck("f", 8), to in deck("t", 8)) {
        let ghost = CardId::new("nobody");
        let winner = CardId::new("t0");

        let (new_from, new_to) = transfer_card(&from, &to, &ghost, &winner);
        prop_assert_eq!(new_from, from);
        prop_assert_eq!(new_to, to);
    }
}

/// Pins the role-swap behavior over the whole element grid at low points,
/// where the clamp and the ceiling matter most.
#[test]
fn test_role_swap_grid() {
    let mut draws = 0;
    for a in Element::ALL {
        for b in Element::ALL {
            for (pa, pb) in [(0, 0), (1, 1), (1, 2), (2, 5), (3, 1)] {
                let x = Card::with_points(CardId::new("x"), a, pa);
                let y = Card::with_points(CardId::new("y"), b, pb);
                let forward = determine_winner(&x, &y).outcome;
                let backward = determine_winner(&y, &x).outcome;
                assert_eq!(forward, backward.flip(), "{a} {pa} vs {b} {pb}");
                if forward == RoundOutcome::Draw {
                    draws += 1;
                }
            }
        }
    }
    // same element, same points
    assert!(draws >= 10);
}

#[test]
fn test_wood_against_fire() {
    let wood = Card::new(CardId::new("w"), Element::Wood);
    let fire = Card::new(CardId::new("f"), Element::Fire);

    assert_eq!(effective_points(&fire, &wood), 3);
    assert_eq!(effective_points(&wood, &fire), 1);
    assert_eq!(determine_winner(&wood, &fire).outcome, RoundOutcome::Lose);
}

use hanabi_core::knowledge::{CardBelief, HandKnowledge, Hint, UnknownCounts};
use hanabi_core::model::card::Card;
use hanabi_core::model::color::Color;
use hanabi_core::model::config::GameConfig;
use hanabi_core::model::deck::UniformDeck;
use hanabi_core::model::observation::{HistoryItem, Move, Observation};

const EPS: f64 = 1e-9;
const THIRD: f64 = 1.0 / 3.0;

fn three_by_three() -> HandKnowledge {
    let config = GameConfig::new(3, 3, 3, 3).unwrap();
    HandKnowledge::new(config, &UniformDeck { copies: 2 }, 0).unwrap()
}

fn blank() -> Observation {
    Observation {
        fireworks: vec![0; 3],
        ..Observation::default()
    }
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPS, "{actual:?} != {expected:?}");
    }
}

fn reveal_color(color: u8, slots: &[usize]) -> HistoryItem {
    // player 1 hints the player two seats after them, which is us
    HistoryItem {
        player_offset: 1,
        action: Move::RevealColor {
            target_offset: 2,
            color: Color::new(color),
        },
        newly_revealed: slots.to_vec(),
    }
}

#[test]
fn no_information_gives_uniform_beliefs() {
    let mut knowledge = three_by_three();
    knowledge.update(&blank()).unwrap();
    for belief in knowledge.beliefs() {
        assert_close(belief.proba_color(), &[THIRD; 3]);
        assert_close(belief.proba_rank(), &[THIRD; 3]);
    }
    let counts = knowledge.unknown_counts();
    assert_eq!(counts.color_total(), counts.rank_total());
}

#[test]
fn color_hint_reveals_one_slot_and_excludes_the_rest() {
    let mut knowledge = three_by_three();
    let contradictions = knowledge.absorb_hints(&[reveal_color(1, &[0])]);
    assert!(contradictions.is_empty());
    assert_eq!(knowledge.belief(0).unwrap().proba_color(), &[0.0, 1.0, 0.0]);
    for slot in [1, 2] {
        let belief = knowledge.belief(slot).unwrap();
        assert_eq!(belief.proba_color()[1], 0.0);
        assert_close(belief.proba_color(), &[0.5, 0.0, 0.5]);
    }
}

#[test]
fn recount_replaces_exclusion_shaping_with_the_pool() {
    let mut knowledge = three_by_three();
    let mut obs = blank();
    obs.last_moves.push(reveal_color(1, &[0]));
    knowledge.update(&obs).unwrap();

    assert_eq!(knowledge.belief(0).unwrap().color_index(), Some(1));
    let expected = [6.0 / 17.0, 5.0 / 17.0, 6.0 / 17.0];
    assert_close(knowledge.belief(1).unwrap().proba_color(), &expected);
    assert_close(knowledge.belief(2).unwrap().proba_color(), &expected);
    assert_eq!(
        knowledge.hints(2).unwrap().as_slice(),
        &[Hint::ExcludedColor(Color::new(1))]
    );
}

#[test]
fn exhausted_color_vanishes_from_uncertain_slots() {
    let mut knowledge = three_by_three();
    let mut obs = blank();
    obs.fireworks = vec![2, 0, 0];
    obs.discard_pile = vec![
        Card::from_indices(0, 0),
        Card::from_indices(0, 1),
        Card::from_indices(0, 2),
    ];
    obs.observed_hands = vec![vec![Card::from_indices(0, 2), Card::from_indices(1, 1)]];
    knowledge.update(&obs).unwrap();

    assert_eq!(knowledge.unknown_counts().colors()[0], 0);
    for belief in knowledge.beliefs() {
        assert_eq!(belief.proba_color()[0], 0.0);
        assert_close(belief.proba_color(), &[0.0, 5.0 / 11.0, 6.0 / 11.0]);
    }
    let counts = knowledge.unknown_counts();
    assert_eq!(counts.color_total(), counts.rank_total());
}

#[test]
fn new_card_shifts_later_slots_down() {
    let mut knowledge = three_by_three();
    let mut obs = blank();
    obs.last_moves.push(reveal_color(2, &[2]));
    knowledge.update(&obs).unwrap();
    let slot_two = knowledge.belief(2).unwrap().clone();
    let slot_two_hints = knowledge.hints(2).unwrap().clone();

    knowledge.initialize_new_card(1).unwrap();

    assert_eq!(knowledge.belief(1).unwrap(), &slot_two);
    assert_eq!(knowledge.hints(1).unwrap(), &slot_two_hints);
    assert!(knowledge.hints(2).unwrap().is_empty());
    let fresh = knowledge.belief(2).unwrap();
    assert_eq!(fresh.color_index(), None);
    let pool = knowledge.unknown_counts();
    let total = pool.color_total() as f64;
    let expected: Vec<f64> = pool.colors().iter().map(|&c| c as f64 / total).collect();
    assert_close(fresh.proba_color(), &expected);
}

#[test]
fn certainty_survives_later_updates() {
    let mut knowledge = three_by_three();
    let mut obs = blank();
    obs.last_moves.push(reveal_color(0, &[1]));
    knowledge.update(&obs).unwrap();

    obs.last_moves.clear();
    obs.discard_pile = vec![Card::from_indices(0, 0), Card::from_indices(0, 1)];
    obs.observed_hands = vec![vec![Card::from_indices(0, 2)], vec![Card::from_indices(0, 2)]];
    knowledge.update(&obs).unwrap();
    assert_eq!(knowledge.belief(1).unwrap().color_index(), Some(0));
}

#[test]
fn slot_order_within_one_hint_does_not_matter() {
    let pool = UnknownCounts::new(vec![1, 2, 4], vec![3, 2, 2]);
    let start = vec![CardBelief::from_counts(&pool); 4];
    let revealed = Hint::ExactColor(Color::new(1));
    let per_slot: Vec<(usize, Hint)> = (0..4)
        .map(|slot| {
            let hint = if slot == 0 || slot == 2 {
                revealed
            } else {
                revealed.complement()
            };
            (slot, hint)
        })
        .collect();

    let mut forward = start.clone();
    for &(slot, hint) in &per_slot {
        forward[slot].apply_hint(hint).unwrap();
    }
    let mut reverse = start;
    for &(slot, hint) in per_slot.iter().rev() {
        reverse[slot].apply_hint(hint).unwrap();
    }
    assert_eq!(forward, reverse);
    assert_eq!(forward[2].color_index(), Some(1));
    assert_eq!(forward[3].proba_color()[1], 0.0);
}

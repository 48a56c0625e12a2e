use hanabi_core::knowledge::{CardBelief, HandKnowledge, JointBelief};
use hanabi_core::model::card::Card;

/// Read-only queries over a player's hand knowledge, for a policy layer.
#[derive(Debug, Clone, Copy)]
pub struct BeliefView<'a> {
    knowledge: &'a HandKnowledge,
}

impl<'a> BeliefView<'a> {
    pub fn new(knowledge: &'a HandKnowledge) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &'a HandKnowledge {
        self.knowledge
    }

    pub fn slots(&self) -> usize {
        self.knowledge.beliefs().len()
    }

    pub fn probability(&self, slot: usize, card: Card) -> f64 {
        self.knowledge
            .belief(slot)
            .map_or(0.0, |belief| belief.probability(card))
    }

    pub fn joint(&self, slot: usize) -> Option<JointBelief> {
        self.knowledge.joint(slot)
    }

    /// Both dimensions resolved.
    pub fn known_card(&self, slot: usize) -> Option<Card> {
        let belief = self.knowledge.belief(slot)?;
        Some(Card::new(belief.known_color()?, belief.known_rank()?))
    }

    pub fn most_likely(&self, slot: usize) -> Option<(Card, f64)> {
        self.joint(slot)?.ranked().into_iter().next()
    }

    /// Mass on cards that would extend their color's stack right now.
    pub fn playable_probability(&self, slot: usize, fireworks: &[u8]) -> f64 {
        self.knowledge.belief(slot).map_or(0.0, |belief| {
            fold_colors(belief, fireworks, |rank, height| rank == height)
        })
    }

    /// Mass on cards whose copy is already on the table, so discarding loses nothing.
    pub fn dead_probability(&self, slot: usize, fireworks: &[u8]) -> f64 {
        self.knowledge.belief(slot).map_or(0.0, |belief| {
            fold_colors(belief, fireworks, |rank, height| rank < height)
        })
    }
}

fn fold_colors<F>(belief: &CardBelief, fireworks: &[u8], matches: F) -> f64
where
    F: Fn(usize, usize) -> bool,
{
    belief
        .proba_color()
        .iter()
        .zip(fireworks)
        .map(|(p_color, &height)| {
            let p_rank: f64 = belief
                .proba_rank()
                .iter()
                .enumerate()
                .filter(|(rank, _)| matches(*rank, height as usize))
                .map(|(_, p)| p)
                .sum();
            p_color * p_rank
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::BeliefView;
    use hanabi_core::knowledge::HandKnowledge;
    use hanabi_core::model::card::Card;
    use hanabi_core::model::color::Color;
    use hanabi_core::model::config::GameConfig;
    use hanabi_core::model::deck::UniformDeck;
    use hanabi_core::model::observation::{HistoryItem, Move};
    use hanabi_core::model::rank::Rank;

    const EPS: f64 = 1e-9;

    fn knowledge() -> HandKnowledge {
        let config = GameConfig::new(2, 2, 3, 2).unwrap();
        HandKnowledge::new(config, &UniformDeck { copies: 1 }, 0).unwrap()
    }

    fn reveal(action: Move, slots: &[usize]) -> HistoryItem {
        HistoryItem {
            player_offset: 1,
            action,
            newly_revealed: slots.to_vec(),
        }
    }

    #[test]
    fn uniform_slot_spreads_play_odds() {
        let knowledge = knowledge();
        let view = BeliefView::new(&knowledge);
        // stacks at 0 and 2: R1 or Y3 would play
        let playable = view.playable_probability(0, &[0, 2]);
        assert!((playable - 2.0 / 6.0).abs() < EPS);
        // R: none dead, Y: Y1 and Y2
        let dead = view.dead_probability(0, &[0, 2]);
        assert!((dead - 2.0 / 6.0).abs() < EPS);
        assert_eq!(view.slots(), 2);
        assert_eq!(view.known_card(0), None);
    }

    #[test]
    fn fully_hinted_slot_is_known() {
        let mut knowledge = knowledge();
        knowledge.absorb_hints(&[
            reveal(
                Move::RevealColor {
                    target_offset: 1,
                    color: Color::new(1),
                },
                &[1],
            ),
            reveal(
                Move::RevealRank {
                    target_offset: 1,
                    rank: Rank::new(2),
                },
                &[1],
            ),
        ]);
        let view = BeliefView::new(&knowledge);
        let card = Card::from_indices(1, 2);
        assert_eq!(view.known_card(1), Some(card));
        assert_eq!(view.most_likely(1), Some((card, 1.0)));
        assert_eq!(view.probability(1, card), 1.0);
        assert_eq!(view.playable_probability(1, &[0, 2]), 1.0);
        assert_eq!(view.dead_probability(1, &[0, 2]), 0.0);
    }

    #[test]
    fn missing_slot_has_no_mass() {
        let knowledge = knowledge();
        let view = BeliefView::new(&knowledge);
        assert_eq!(view.probability(5, Card::from_indices(0, 0)), 0.0);
        assert!(view.joint(5).is_none());
        assert_eq!(view.playable_probability(5, &[0, 0]), 0.0);
    }
}

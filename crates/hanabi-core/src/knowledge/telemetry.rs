use super::card::CardBelief;
use super::hand::HandKnowledge;

/// Entropy summary of a hand, in nats.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeMetrics {
    pub player_index: usize,
    pub color_entropy: Vec<f64>,
    pub rank_entropy: Vec<f64>,
    pub total_entropy: f64,
    pub unknown_pool: u32,
    pub fully_known_slots: usize,
}

impl KnowledgeMetrics {
    pub fn from_knowledge(knowledge: &HandKnowledge) -> Self {
        let beliefs = knowledge.beliefs();
        let color_entropy: Vec<f64> = beliefs
            .iter()
            .map(|b| entropy(b.proba_color()))
            .collect();
        let rank_entropy: Vec<f64> = beliefs.iter().map(|b| entropy(b.proba_rank())).collect();
        let total_entropy = color_entropy.iter().chain(&rank_entropy).sum();

        Self {
            player_index: knowledge.player_index(),
            color_entropy,
            rank_entropy,
            total_entropy,
            unknown_pool: knowledge.unknown_counts().color_total(),
            fully_known_slots: beliefs.iter().filter(|b| b.is_fully_known()).count(),
        }
    }

    /// Entropy of the joint color-rank distribution of one slot. The two
    /// vectors are independent, so this is the sum of their entropies.
    pub fn slot_entropy(belief: &CardBelief) -> f64 {
        entropy(belief.proba_color()) + entropy(belief.proba_rank())
    }
}

fn entropy(vector: &[f64]) -> f64 {
    vector
        .iter()
        .filter(|p| **p > 0.0)
        .map(|p| -p * p.ln())
        .sum()
}

//! Per-color and per-rank counts of cards the observer has not identified.

use super::card::CardBelief;
use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::config::GameConfig;
use crate::model::deck::DeckComposition;
use crate::model::observation::Observation;
use crate::model::rank::Rank;
use serde::{Deserialize, Serialize};

/// The unknown pool bucketed two ways. Rebuilt from scratch on every recount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnknownCounts {
    colors: Vec<u32>,
    ranks: Vec<u32>,
}

impl UnknownCounts {
    pub fn new(colors: Vec<u32>, ranks: Vec<u32>) -> Self {
        Self { colors, ranks }
    }

    /// Counts for a deck with nothing seen yet.
    pub fn full(config: &GameConfig, deck: &dyn DeckComposition) -> Self {
        let per_color = deck.total_per_color(config);
        Self {
            colors: vec![per_color; config.colors],
            ranks: Rank::all(config.ranks)
                .map(|rank| deck.total_per_rank(config, rank))
                .collect(),
        }
    }

    /// Full deck minus every card on the table, in the discard pile, in
    /// other players' hands, and every own-hand dimension already certain.
    pub fn compute(
        config: &GameConfig,
        deck: &dyn DeckComposition,
        observation: &Observation,
        beliefs: &[CardBelief],
    ) -> Self {
        Self::full(config, deck).without_seen(config, observation, beliefs)
    }

    /// Subtracts everything the observer can account for from these totals.
    pub fn without_seen(
        mut self,
        config: &GameConfig,
        observation: &Observation,
        beliefs: &[CardBelief],
    ) -> Self {
        for (color, &height) in Color::all(config.colors).zip(&observation.fireworks) {
            for rank in Rank::all(height as usize) {
                self.remove_card(Card::new(color, rank));
            }
        }
        for &card in observation.visible_cards() {
            self.remove_card(card);
        }
        for belief in beliefs {
            if let Some(color) = belief.known_color() {
                self.remove_color(color);
            }
            if let Some(rank) = belief.known_rank() {
                self.remove_rank(rank);
            }
        }
        self
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    pub fn color(&self, color: Color) -> u32 {
        self.colors.get(color.index()).copied().unwrap_or(0)
    }

    pub fn rank(&self, rank: Rank) -> u32 {
        self.ranks.get(rank.index()).copied().unwrap_or(0)
    }

    pub fn color_total(&self) -> u32 {
        self.colors.iter().sum()
    }

    pub fn rank_total(&self) -> u32 {
        self.ranks.iter().sum()
    }

    /// Normalized color counts, or `None` when the pool is empty.
    pub fn color_distribution(&self) -> Option<Vec<f64>> {
        normalize(&self.colors)
    }

    /// Normalized rank counts, or `None` when the pool is empty.
    pub fn rank_distribution(&self) -> Option<Vec<f64>> {
        normalize(&self.ranks)
    }

    pub fn remove_card(&mut self, card: Card) {
        self.remove_color(card.color);
        self.remove_rank(card.rank);
    }

    pub fn remove_color(&mut self, color: Color) {
        if let Some(slot) = self.colors.get_mut(color.index()) {
            if *slot == 0 {
                tracing::warn!(%color, "unknown color count would go negative");
            }
            *slot = slot.saturating_sub(1);
        }
    }

    pub fn remove_rank(&mut self, rank: Rank) {
        if let Some(slot) = self.ranks.get_mut(rank.index()) {
            if *slot == 0 {
                tracing::warn!(%rank, "unknown rank count would go negative");
            }
            *slot = slot.saturating_sub(1);
        }
    }
}

fn normalize(counts: &[u32]) -> Option<Vec<f64>> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    Some(counts.iter().map(|&count| count as f64 / total).collect())
}

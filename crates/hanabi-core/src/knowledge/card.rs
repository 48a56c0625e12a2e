//! Belief about a single hand slot: independent color and rank vectors.

use super::counts::UnknownCounts;
use super::error::RejectedHint;
use super::hint::Hint;
use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::rank::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBelief {
    proba_color: Vec<f64>,
    proba_rank: Vec<f64>,
}

impl CardBelief {
    /// Max-entropy estimate from the current unknown pool. An empty pool
    /// yields a uniform vector rather than NaN.
    pub fn from_counts(counts: &UnknownCounts) -> Self {
        Self {
            proba_color: counts
                .color_distribution()
                .unwrap_or_else(|| uniform(counts.colors().len())),
            proba_rank: counts
                .rank_distribution()
                .unwrap_or_else(|| uniform(counts.ranks().len())),
        }
    }

    pub fn from_vectors(proba_color: Vec<f64>, proba_rank: Vec<f64>) -> Self {
        Self {
            proba_color,
            proba_rank,
        }
    }

    pub fn proba_color(&self) -> &[f64] {
        &self.proba_color
    }

    pub fn proba_rank(&self) -> &[f64] {
        &self.proba_rank
    }

    /// Index of the known color, if the color vector is certain.
    pub fn color_index(&self) -> Option<usize> {
        specific_index(&self.proba_color)
    }

    /// Index of the known rank, if the rank vector is certain.
    pub fn rank_index(&self) -> Option<usize> {
        specific_index(&self.proba_rank)
    }

    pub fn known_color(&self) -> Option<Color> {
        self.color_index().map(|index| Color::new(index as u8))
    }

    pub fn known_rank(&self) -> Option<Rank> {
        self.rank_index().map(|index| Rank::new(index as u8))
    }

    pub fn is_fully_known(&self) -> bool {
        self.color_index().is_some() && self.rank_index().is_some()
    }

    /// Whether this slot is already certain of what a positive hint states.
    pub fn confirms(&self, hint: Hint) -> bool {
        match hint {
            Hint::ExactColor(color) => self.color_index() == Some(color.index()),
            Hint::ExactRank(rank) => self.rank_index() == Some(rank.index()),
            Hint::ExcludedColor(_) | Hint::ExcludedRank(_) => false,
        }
    }

    pub fn apply_hint(&mut self, hint: Hint) -> Result<(), RejectedHint> {
        let applied = match hint {
            Hint::ExactColor(color) => set_exact(&mut self.proba_color, color.index()),
            Hint::ExactRank(rank) => set_exact(&mut self.proba_rank, rank.index()),
            Hint::ExcludedColor(color) => set_excluded(&mut self.proba_color, color.index()),
            Hint::ExcludedRank(rank) => set_excluded(&mut self.proba_rank, rank.index()),
        };
        if applied {
            Ok(())
        } else {
            Err(RejectedHint(hint))
        }
    }

    /// Overwrites every uncertain dimension with the pool distribution.
    /// Exclusion shaping on that dimension is discarded. Returns whether a
    /// dimension became certain.
    pub fn redistribute_from(&mut self, counts: &UnknownCounts) -> bool {
        let mut resolved = false;
        if self.color_index().is_none() {
            if let Some(distribution) = counts.color_distribution() {
                self.proba_color = distribution;
                resolved |= self.color_index().is_some();
            }
        }
        if self.rank_index().is_none() {
            if let Some(distribution) = counts.rank_distribution() {
                self.proba_rank = distribution;
                resolved |= self.rank_index().is_some();
            }
        }
        resolved
    }

    /// Probability that the slot holds exactly `card`.
    pub fn probability(&self, card: Card) -> f64 {
        let color = self.proba_color.get(card.color.index()).copied();
        let rank = self.proba_rank.get(card.rank.index()).copied();
        color.unwrap_or(0.0) * rank.unwrap_or(0.0)
    }

    pub fn joint(&self) -> JointBelief {
        let cells = self
            .proba_color
            .iter()
            .flat_map(|c| self.proba_rank.iter().map(move |r| c * r))
            .collect();
        JointBelief {
            ranks: self.proba_rank.len(),
            cells,
        }
    }
}

/// Outer product of a slot's color and rank vectors, row per color.
#[derive(Debug, Clone, PartialEq)]
pub struct JointBelief {
    ranks: usize,
    cells: Vec<f64>,
}

impl JointBelief {
    pub fn get(&self, color: Color, rank: Rank) -> f64 {
        if rank.index() >= self.ranks {
            return 0.0;
        }
        self.cells
            .get(color.index() * self.ranks + rank.index())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.ranks.max(1))
    }

    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Cards with non-zero mass, most likely first.
    pub fn ranked(&self) -> Vec<(Card, f64)> {
        let mut cards: Vec<(Card, f64)> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.0)
            .map(|(index, p)| {
                let color = (index / self.ranks) as u8;
                let rank = (index % self.ranks) as u8;
                (Card::from_indices(color, rank), *p)
            })
            .collect();
        cards.sort_by(|a, b| b.1.total_cmp(&a.1));
        cards
    }
}

/// The single index holding 1 with every other entry 0.
pub fn specific_index(vector: &[f64]) -> Option<usize> {
    let index = vector.iter().position(|&p| p == 1.0)?;
    vector
        .iter()
        .enumerate()
        .all(|(i, &p)| i == index || p == 0.0)
        .then_some(index)
}

fn uniform(len: usize) -> Vec<f64> {
    vec![1.0 / len.max(1) as f64; len]
}

fn set_exact(vector: &mut [f64], index: usize) -> bool {
    if index >= vector.len() {
        return false;
    }
    if let Some(known) = specific_index(vector) {
        return known == index;
    }
    for (i, p) in vector.iter_mut().enumerate() {
        *p = if i == index { 1.0 } else { 0.0 };
    }
    true
}

fn set_excluded(vector: &mut [f64], index: usize) -> bool {
    let Some(&mass) = vector.get(index) else {
        return false;
    };
    if mass == 0.0 {
        return true;
    }
    let receivers: Vec<usize> = (0..vector.len())
        .filter(|&i| i != index && vector[i] != 0.0)
        .collect();
    match receivers.as_slice() {
        [] => return false,
        // Summing shares drifts below 1.0, which would hide the certainty.
        &[only] => {
            for (i, p) in vector.iter_mut().enumerate() {
                *p = if i == only { 1.0 } else { 0.0 };
            }
            return true;
        }
        _ => {}
    }
    let share = mass / receivers.len() as f64;
    for i in receivers {
        vector[i] += share;
    }
    vector[index] = 0.0;
    true
}

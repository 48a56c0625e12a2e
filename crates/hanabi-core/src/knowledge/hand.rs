//! Per-player knowledge of their own hand, updated once per turn.

use super::card::{CardBelief, JointBelief};
use super::counts::UnknownCounts;
use super::error::{Contradiction, KnowledgeError, RejectedHint};
use super::hint::{Hint, HintLog};
use crate::model::config::GameConfig;
use crate::model::deck::DeckComposition;
use crate::model::observation::{HistoryItem, Move, Observation};

/// Owns the unknown pool and one belief plus hint log per hand slot.
///
/// Slots are indexed in physical hand order. When a card leaves the hand the
/// caller invokes [`HandKnowledge::initialize_new_card`], which shifts the
/// later slots down and installs a fresh belief at the end.
#[derive(Debug, Clone)]
pub struct HandKnowledge {
    player_index: usize,
    config: GameConfig,
    totals: UnknownCounts,
    unknown: UnknownCounts,
    beliefs: Vec<CardBelief>,
    hints: Vec<HintLog>,
}

/// Outcome of one [`HandKnowledge::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Recount/redistribute passes run before the state settled.
    pub iterations: usize,
    /// Hints that could not be applied. The affected slots were left unchanged.
    pub contradictions: Vec<Contradiction>,
    /// Color or rank dimensions that became certain during this update.
    pub newly_certain: usize,
}

impl UpdateReport {
    pub fn is_consistent(&self) -> bool {
        self.contradictions.is_empty()
    }
}

impl HandKnowledge {
    pub fn new(
        config: GameConfig,
        deck: &dyn DeckComposition,
        player_index: usize,
    ) -> Result<Self, KnowledgeError> {
        if player_index >= config.players {
            return Err(KnowledgeError::PlayerOutOfRange {
                index: player_index,
                players: config.players,
            });
        }
        let totals = UnknownCounts::full(&config, deck);
        let beliefs = (0..config.hand_size)
            .map(|_| CardBelief::from_counts(&totals))
            .collect();
        Ok(Self {
            player_index,
            config,
            unknown: totals.clone(),
            totals,
            beliefs,
            hints: vec![HintLog::new(); config.hand_size],
        })
    }

    pub(crate) fn from_parts(
        player_index: usize,
        config: GameConfig,
        totals: UnknownCounts,
        unknown: UnknownCounts,
        beliefs: Vec<CardBelief>,
        hints: Vec<HintLog>,
    ) -> Self {
        Self {
            player_index,
            config,
            totals,
            unknown,
            beliefs,
            hints,
        }
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn unknown_counts(&self) -> &UnknownCounts {
        &self.unknown
    }

    pub fn beliefs(&self) -> &[CardBelief] {
        &self.beliefs
    }

    pub fn belief(&self, slot: usize) -> Option<&CardBelief> {
        self.beliefs.get(slot)
    }

    pub fn hints(&self, slot: usize) -> Option<&HintLog> {
        self.hints.get(slot)
    }

    pub fn joint(&self, slot: usize) -> Option<JointBelief> {
        self.belief(slot).map(CardBelief::joint)
    }

    /// Absorbs this turn's hints, then alternates recount and redistribution
    /// until neither the unknown pool nor any slot's certainty changes.
    pub fn update(&mut self, observation: &Observation) -> Result<UpdateReport, KnowledgeError> {
        observation.validate(&self.config)?;
        let certain_before = self.certain_dimensions();

        let contradictions = self.absorb_hints(&observation.last_moves);

        let limit = self.iteration_limit();
        let mut iterations = 0;
        loop {
            iterations += 1;
            let recount =
                self.totals
                    .clone()
                    .without_seen(&self.config, observation, &self.beliefs);
            let changed = recount != self.unknown;
            self.unknown = recount;

            let mut dirty = false;
            for belief in &mut self.beliefs {
                dirty |= belief.redistribute_from(&self.unknown);
            }
            tracing::trace!(
                player = self.player_index,
                iterations,
                changed,
                dirty,
                "knowledge pass"
            );

            if !changed && !dirty {
                break;
            }
            if iterations >= limit {
                tracing::error!(
                    player = self.player_index,
                    iterations,
                    "knowledge propagation did not settle"
                );
                break;
            }
        }

        let report = UpdateReport {
            iterations,
            newly_certain: self.certain_dimensions().saturating_sub(certain_before),
            contradictions,
        };
        tracing::debug!(
            player = self.player_index,
            iterations = report.iterations,
            newly_certain = report.newly_certain,
            contradictions = report.contradictions.len(),
            unknown_colors = ?self.unknown.colors(),
            unknown_ranks = ?self.unknown.ranks(),
            "knowledge updated"
        );
        Ok(report)
    }

    /// Applies every hint in `moves` aimed at this player. Revealed slots get
    /// the exact fact, every other slot gets its complement. A slot already
    /// certain of the hinted value counts as touched even when the engine
    /// leaves it out of `newly_revealed`.
    pub fn absorb_hints(&mut self, moves: &[HistoryItem]) -> Vec<Contradiction> {
        let mut contradictions = Vec::new();
        for item in moves {
            if item.newly_revealed.is_empty() {
                continue;
            }
            let Some(positive) = self.hint_for_me(item) else {
                continue;
            };
            for slot in 0..self.beliefs.len() {
                let touched = item.newly_revealed.contains(&slot)
                    || self.beliefs[slot].confirms(positive);
                let hint = if touched {
                    positive
                } else {
                    positive.complement()
                };
                self.hints[slot].push(hint);
                if let Err(RejectedHint(hint)) = self.beliefs[slot].apply_hint(hint) {
                    let contradiction = Contradiction { slot, hint };
                    tracing::warn!(player = self.player_index, %contradiction, "rejected hint");
                    contradictions.push(contradiction);
                }
            }
        }
        contradictions
    }

    /// Drops `slot`, shifts later slots down and appends a fresh belief
    /// drawn from the current unknown pool.
    pub fn initialize_new_card(&mut self, slot: usize) -> Result<(), KnowledgeError> {
        if slot >= self.beliefs.len() {
            return Err(KnowledgeError::SlotOutOfRange {
                slot,
                hand_size: self.beliefs.len(),
            });
        }
        self.beliefs.remove(slot);
        self.hints.remove(slot);
        self.beliefs.push(CardBelief::from_counts(&self.unknown));
        self.hints.push(HintLog::new());
        Ok(())
    }

    fn hint_for_me(&self, item: &HistoryItem) -> Option<Hint> {
        let target_offset = item.action.target_offset()?;
        let target = (self.player_index + item.player_offset + target_offset) % self.config.players;
        if target != self.player_index {
            return None;
        }
        match item.action {
            Move::RevealColor { color, .. } => Some(Hint::ExactColor(color)),
            Move::RevealRank { rank, .. } => Some(Hint::ExactRank(rank)),
            Move::Play { .. } | Move::Discard { .. } => None,
        }
    }

    fn certain_dimensions(&self) -> usize {
        self.beliefs
            .iter()
            .map(|belief| {
                belief.color_index().is_some() as usize + belief.rank_index().is_some() as usize
            })
            .sum()
    }

    // One pass per dimension that can resolve, plus the settling passes.
    fn iteration_limit(&self) -> usize {
        2 * self.config.hand_size + 4
    }
}

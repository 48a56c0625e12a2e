//! JSON dump of a player's knowledge, for debugging and replays.

use super::card::CardBelief;
use super::counts::UnknownCounts;
use super::error::KnowledgeError;
use super::hand::HandKnowledge;
use super::hint::HintLog;
use crate::model::config::GameConfig;
use crate::model::deck::DeckComposition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSnapshot {
    pub player_index: usize,
    pub config: GameConfig,
    pub unknown: UnknownCounts,
    pub slots: Vec<SlotSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub belief: CardBelief,
    #[serde(default)]
    pub hints: HintLog,
}

impl KnowledgeSnapshot {
    pub fn capture(knowledge: &HandKnowledge) -> Self {
        let slots = (0..knowledge.beliefs().len())
            .filter_map(|slot| {
                Some(SlotSnapshot {
                    belief: knowledge.belief(slot)?.clone(),
                    hints: knowledge.hints(slot)?.clone(),
                })
            })
            .collect();
        Self {
            player_index: knowledge.player_index(),
            config: *knowledge.config(),
            unknown: knowledge.unknown_counts().clone(),
            slots,
        }
    }

    /// Rebuilds the knowledge. The deck must match the one the snapshot was
    /// taken with, since totals are not stored.
    pub fn restore(self, deck: &dyn DeckComposition) -> Result<HandKnowledge, KnowledgeError> {
        if self.player_index >= self.config.players {
            return Err(KnowledgeError::PlayerOutOfRange {
                index: self.player_index,
                players: self.config.players,
            });
        }
        if self.slots.len() != self.config.hand_size {
            return Err(KnowledgeError::SnapshotShape {
                expected: self.config.hand_size,
                actual: self.slots.len(),
            });
        }
        let totals = UnknownCounts::full(&self.config, deck);
        let (beliefs, hints) = self
            .slots
            .into_iter()
            .map(|slot| (slot.belief, slot.hints))
            .unzip();
        Ok(HandKnowledge::from_parts(
            self.player_index,
            self.config,
            totals,
            self.unknown,
            beliefs,
            hints,
        ))
    }

    pub fn to_json(knowledge: &HandKnowledge) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(knowledge))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

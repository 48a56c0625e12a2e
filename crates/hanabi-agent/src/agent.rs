//! Drives one player's [`HandKnowledge`] through a game.

use crate::features::AgentFeatures;
use crate::view::BeliefView;
use hanabi_core::knowledge::{
    Contradiction, HandKnowledge, KnowledgeError, KnowledgeMetrics, KnowledgeSnapshot,
    UpdateReport,
};
use hanabi_core::model::config::GameConfig;
use hanabi_core::model::deck::DeckComposition;
use hanabi_core::model::observation::{Move, Observation};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
    #[error("strict mode: {0}")]
    Contradiction(Contradiction),
}

/// Keeps a player's knowledge in step with the game. The surrounding loop
/// calls [`observe`](Self::observe) every turn and [`commit`](Self::commit)
/// whenever this player plays or discards.
#[derive(Debug, Clone)]
pub struct KnowledgeAgent {
    knowledge: HandKnowledge,
    features: AgentFeatures,
}

impl KnowledgeAgent {
    pub fn new(
        config: GameConfig,
        deck: &dyn DeckComposition,
        player_index: usize,
        features: AgentFeatures,
    ) -> Result<Self, AgentError> {
        Ok(Self {
            knowledge: HandKnowledge::new(config, deck, player_index)?,
            features,
        })
    }

    pub fn knowledge(&self) -> &HandKnowledge {
        &self.knowledge
    }

    pub fn features(&self) -> AgentFeatures {
        self.features
    }

    pub fn view(&self) -> BeliefView<'_> {
        BeliefView::new(&self.knowledge)
    }

    pub fn observe(&mut self, observation: &Observation) -> Result<UpdateReport, AgentError> {
        let report = self.knowledge.update(observation)?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let metrics = KnowledgeMetrics::from_knowledge(&self.knowledge);
            tracing::debug!(
                player = metrics.player_index,
                entropy = metrics.total_entropy,
                known = metrics.fully_known_slots,
                pool = metrics.unknown_pool,
                "hand knowledge"
            );
        }
        if self.features.log_knowledge() {
            match KnowledgeSnapshot::to_json(&self.knowledge) {
                Ok(json) => tracing::debug!(
                    player = self.knowledge.player_index(),
                    snapshot = %json,
                    "knowledge snapshot"
                ),
                Err(err) => tracing::warn!(%err, "failed to serialize knowledge snapshot"),
            }
        }

        if self.features.strict_contradictions() {
            if let Some(first) = report.contradictions.first() {
                return Err(AgentError::Contradiction(*first));
            }
        }
        Ok(report)
    }

    /// Records a move this player has committed to. Plays and discards free
    /// their slot for the replacement card.
    pub fn commit(&mut self, action: Move) -> Result<(), AgentError> {
        if let Some(slot) = action.hand_slot() {
            self.knowledge.initialize_new_card(slot)?;
            tracing::trace!(
                player = self.knowledge.player_index(),
                slot,
                "slot replaced"
            );
        }
        Ok(())
    }
}

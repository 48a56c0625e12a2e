use super::hint::Hint;
use crate::model::observation::ObservationError;
use thiserror::Error;

/// A hint that cannot be reconciled with a slot's current belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hint `{0}` leaves no remaining alternative")]
pub struct RejectedHint(pub Hint);

/// A rejected hint together with the slot it was aimed at. Recoverable: the
/// slot keeps its previous belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slot {slot}: hint `{hint}` contradicts the current belief")]
pub struct Contradiction {
    pub slot: usize,
    pub hint: Hint,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    #[error("invalid observation: {0}")]
    Observation(#[from] ObservationError),
    #[error("hand slot {slot} is outside a hand of {hand_size}")]
    SlotOutOfRange { slot: usize, hand_size: usize },
    #[error("player index {index} is outside a table of {players}")]
    PlayerOutOfRange { index: usize, players: usize },
    #[error("snapshot holds {actual} slots, config expects {expected}")]
    SnapshotShape { expected: usize, actual: usize },
}

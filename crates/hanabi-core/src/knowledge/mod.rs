//! What a player knows about the cards in their own hand.
//!
//! - `counts`: the pool of cards not yet identified (`UnknownCounts`).
//! - `card`: per-slot color and rank probability vectors (`CardBelief`).
//! - `hint`: atomic facts about a slot and the per-slot log.
//! - `hand`: `HandKnowledge`, which runs the per-turn propagation.
//! - `telemetry` and `snapshot`: read-only summaries and JSON dumps.

mod card;
mod counts;
mod error;
mod hand;
mod hint;
mod snapshot;
mod telemetry;

pub use card::{CardBelief, JointBelief, specific_index};
pub use counts::UnknownCounts;
pub use error::{Contradiction, KnowledgeError, RejectedHint};
pub use hand::{HandKnowledge, UpdateReport};
pub use hint::{Hint, HintLog};
pub use snapshot::{KnowledgeSnapshot, SlotSnapshot};
pub use telemetry::KnowledgeMetrics;

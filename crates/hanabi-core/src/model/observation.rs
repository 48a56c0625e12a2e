//! Read-only per-turn data supplied by the game engine.

use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::config::GameConfig;
use crate::model::rank::Rank;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What one player can see at the start of a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Stack height per color; ranks `0..height` of that color are on the table.
    pub fireworks: Vec<u8>,
    pub discard_pile: Vec<Card>,
    /// Hands of every other player, in seat order after the observer.
    pub observed_hands: Vec<Vec<Card>>,
    /// Moves made since the observer's previous update, oldest first.
    pub last_moves: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Acting player relative to the observer.
    pub player_offset: usize,
    pub action: Move,
    /// Target hand slots whose color or rank this move revealed for the first time.
    #[serde(default)]
    pub newly_revealed: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Play { card_index: usize },
    Discard { card_index: usize },
    /// `target_offset` is relative to the acting player.
    RevealColor { target_offset: usize, color: Color },
    RevealRank { target_offset: usize, rank: Rank },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Play,
    Discard,
    RevealColor,
    RevealRank,
}

impl Move {
    pub const fn kind(self) -> MoveKind {
        match self {
            Move::Play { .. } => MoveKind::Play,
            Move::Discard { .. } => MoveKind::Discard,
            Move::RevealColor { .. } => MoveKind::RevealColor,
            Move::RevealRank { .. } => MoveKind::RevealRank,
        }
    }

    /// Hand slot leaving the actor's hand, for plays and discards.
    pub const fn hand_slot(self) -> Option<usize> {
        match self {
            Move::Play { card_index } | Move::Discard { card_index } => Some(card_index),
            _ => None,
        }
    }

    pub const fn target_offset(self) -> Option<usize> {
        match self {
            Move::RevealColor { target_offset, .. } | Move::RevealRank { target_offset, .. } => {
                Some(target_offset)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("expected {expected} firework stacks, got {actual}")]
    FireworksLength { expected: usize, actual: usize },
    #[error("stack {color} has height {height}, above the rank count")]
    StackTooHigh { color: Color, height: u8 },
    #[error("card {card} is outside the configured colors or ranks")]
    CardOutOfRange { card: Card },
    #[error("observed {actual} other hands, table only seats {expected}")]
    TooManyHands { expected: usize, actual: usize },
    #[error("move {action:?} names a color or rank outside the configuration")]
    MoveOutOfRange { action: Move },
    #[error("hand slot {slot} is outside a hand of {hand_size}")]
    SlotOutOfRange { slot: usize, hand_size: usize },
    #[error("seat offset {offset} is outside a table of {players}")]
    OffsetOutOfRange { offset: usize, players: usize },
}

impl Observation {
    pub fn validate(&self, config: &GameConfig) -> Result<(), ObservationError> {
        if self.fireworks.len() != config.colors {
            return Err(ObservationError::FireworksLength {
                expected: config.colors,
                actual: self.fireworks.len(),
            });
        }
        for (color, &height) in Color::all(config.colors).zip(&self.fireworks) {
            if height as usize > config.ranks {
                return Err(ObservationError::StackTooHigh { color, height });
            }
        }

        let others = config.players.saturating_sub(1);
        if self.observed_hands.len() > others {
            return Err(ObservationError::TooManyHands {
                expected: others,
                actual: self.observed_hands.len(),
            });
        }
        for &card in self.visible_cards() {
            if card.color.index() >= config.colors || card.rank.index() >= config.ranks {
                return Err(ObservationError::CardOutOfRange { card });
            }
        }

        for item in &self.last_moves {
            let offsets = item.action.target_offset().into_iter();
            for offset in offsets.chain(Some(item.player_offset)) {
                if offset >= config.players {
                    return Err(ObservationError::OffsetOutOfRange {
                        offset,
                        players: config.players,
                    });
                }
            }
            let in_range = match item.action {
                Move::RevealColor { color, .. } => color.index() < config.colors,
                Move::RevealRank { rank, .. } => rank.index() < config.ranks,
                Move::Play { .. } | Move::Discard { .. } => true,
            };
            if !in_range {
                return Err(ObservationError::MoveOutOfRange {
                    action: item.action,
                });
            }
            let slots = item.action.hand_slot().into_iter();
            for slot in slots.chain(item.newly_revealed.iter().copied()) {
                if slot >= config.hand_size {
                    return Err(ObservationError::SlotOutOfRange {
                        slot,
                        hand_size: config.hand_size,
                    });
                }
            }
        }
        Ok(())
    }

    /// Discarded cards followed by every card in other players' hands.
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.discard_pile
            .iter()
            .chain(self.observed_hands.iter().flatten())
    }
}

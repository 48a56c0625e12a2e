use crate::model::color::Color;
use crate::model::rank::Rank;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single fact about one hand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    ExactColor(Color),
    ExactRank(Rank),
    ExcludedColor(Color),
    ExcludedRank(Rank),
}

impl Hint {
    pub const fn is_positive(self) -> bool {
        matches!(self, Hint::ExactColor(_) | Hint::ExactRank(_))
    }

    /// The fact implied for slots a hint did not touch, and vice versa.
    pub const fn complement(self) -> Hint {
        match self {
            Hint::ExactColor(color) => Hint::ExcludedColor(color),
            Hint::ExactRank(rank) => Hint::ExcludedRank(rank),
            Hint::ExcludedColor(color) => Hint::ExactColor(color),
            Hint::ExcludedRank(rank) => Hint::ExactRank(rank),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::ExactColor(color) => write!(f, "is {color}"),
            Hint::ExactRank(rank) => write!(f, "is {rank}"),
            Hint::ExcludedColor(color) => write!(f, "not {color}"),
            Hint::ExcludedRank(rank) => write!(f, "not {rank}"),
        }
    }
}

/// Every hint a slot has received, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HintLog(Vec<Hint>);

impl HintLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, hint: Hint) {
        self.0.push(hint);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hint> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Hint] {
        &self.0
    }
}

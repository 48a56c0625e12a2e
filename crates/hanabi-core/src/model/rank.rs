use core::fmt;
use serde::{Deserialize, Serialize};

/// Zero-based card rank. Displayed one-based, as printed on the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all(count: usize) -> impl Iterator<Item = Rank> {
        (0..count).map(|index| Rank(index as u8))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as u16 + 1)
    }
}

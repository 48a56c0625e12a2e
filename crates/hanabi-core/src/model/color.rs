use core::fmt;
use serde::{Deserialize, Serialize};

const LETTERS: [char; 5] = ['R', 'Y', 'G', 'W', 'B'];

/// Index of a firework color. The number of colors in play comes from the
/// game configuration, so this is an index rather than a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u8);

impl Color {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all(count: usize) -> impl Iterator<Item = Color> {
        (0..count).map(|index| Color(index as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LETTERS.get(self.index()) {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "C{}", self.0),
        }
    }
}

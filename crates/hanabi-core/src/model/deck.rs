use crate::model::config::GameConfig;
use crate::model::rank::Rank;

/// Reports how many copies of each rank exist per color.
pub trait DeckComposition {
    fn copies(&self, rank: Rank) -> u32;

    fn total_per_color(&self, config: &GameConfig) -> u32 {
        Rank::all(config.ranks).map(|rank| self.copies(rank)).sum()
    }

    fn total_per_rank(&self, config: &GameConfig, rank: Rank) -> u32 {
        config.colors as u32 * self.copies(rank)
    }

    fn total_cards(&self, config: &GameConfig) -> u32 {
        config.colors as u32 * self.total_per_color(config)
    }
}

/// Standard distribution: three of the lowest rank, one of the highest,
/// two of everything in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanabiDeck {
    ranks: usize,
}

impl HanabiDeck {
    pub const fn new(config: &GameConfig) -> Self {
        Self {
            ranks: config.ranks,
        }
    }
}

impl DeckComposition for HanabiDeck {
    fn copies(&self, rank: Rank) -> u32 {
        if rank.index() == 0 {
            3
        } else if rank.index() + 1 == self.ranks {
            1
        } else {
            2
        }
    }
}

/// Every (color, rank) pair appears the same number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDeck {
    pub copies: u32,
}

impl DeckComposition for UniformDeck {
    fn copies(&self, _rank: Rank) -> u32 {
        self.copies
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

const DEFAULT_PLAYERS: usize = 5;
const DEFAULT_COLORS: usize = 5;
const DEFAULT_RANKS: usize = 5;

/// Table size and card layout of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    pub colors: usize,
    pub ranks: usize,
    pub hand_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config field `{field}` must be at least 1")]
    Zero { field: &'static str },
}

impl GameConfig {
    pub fn new(
        players: usize,
        colors: usize,
        ranks: usize,
        hand_size: usize,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("players", players),
            ("colors", colors),
            ("ranks", ranks),
            ("hand_size", hand_size),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        Ok(Self {
            players,
            colors,
            ranks,
            hand_size,
        })
    }

    /// Standard deal: five cards for two or three players, four otherwise.
    pub const fn default_hand_size(players: usize) -> usize {
        if players <= 3 { 5 } else { 4 }
    }

    /// Reads `HANABI_PLAYERS`, `HANABI_COLORS`, `HANABI_RANKS` and
    /// `HANABI_HAND_SIZE` from the process environment.
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self::resolve(|key| read(&format!("HANABI_{}", key.to_ascii_uppercase())))
    }

    /// Builds a config from dictionary-style entries keyed by `players`,
    /// `colors`, `ranks` and `hand_size`. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.to_string()))
            .collect();
        Self::resolve(|key| map.get(key).cloned())
    }

    fn resolve<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let players = read_count(&mut read, "players").unwrap_or(DEFAULT_PLAYERS);
        let colors = read_count(&mut read, "colors").unwrap_or(DEFAULT_COLORS);
        let ranks = read_count(&mut read, "ranks").unwrap_or(DEFAULT_RANKS);
        let hand_size =
            read_count(&mut read, "hand_size").unwrap_or(Self::default_hand_size(players));
        Self {
            players,
            colors,
            ranks,
            hand_size,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            colors: DEFAULT_COLORS,
            ranks: DEFAULT_RANKS,
            hand_size: Self::default_hand_size(DEFAULT_PLAYERS),
        }
    }
}

fn read_count<F>(read: &mut F, key: &str) -> Option<usize>
where
    F: FnMut(&str) -> Option<String>,
{
    let raw = read(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid config value, using default");
            None
        }
    }
}

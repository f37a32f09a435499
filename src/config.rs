use anyhow::{Context, Result};
use std::env;

use crate::{
    game::{GridGenerator, PlacementPolicy, DEFAULT_MAX_ATTEMPTS},
    words::WordList,
};

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_WORDS: &str = "CELULA,ADN,NUCLEO,CITOPLASMA,ENZIMA,CLOROFILA";

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid_size: usize,
    pub words: WordList,
    pub max_attempts: usize,
    pub strict_placement: bool,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Deal a new puzzle as soon as the current one is won
    pub auto_restart: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let words = match lookup("WORD_SEARCH_WORDS_PATH") {
            Some(path) => WordList::load(&path)?,
            None => {
                let raw = lookup("WORD_SEARCH_WORDS").unwrap_or_else(|| DEFAULT_WORDS.to_string());
                parse_word_list(&raw).context("WORD_SEARCH_WORDS is not a valid word list")?
            }
        };

        let game = GameConfig {
            grid_size: lookup("WORD_SEARCH_GRID_SIZE")
                .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
                .parse()
                .context("WORD_SEARCH_GRID_SIZE must be a number")?,
            words,
            max_attempts: lookup("WORD_SEARCH_MAX_ATTEMPTS")
                .unwrap_or_else(|| DEFAULT_MAX_ATTEMPTS.to_string())
                .parse()
                .context("WORD_SEARCH_MAX_ATTEMPTS must be a number")?,
            strict_placement: lookup("WORD_SEARCH_STRICT_PLACEMENT")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("WORD_SEARCH_STRICT_PLACEMENT must be true or false")?,
        };

        let display = DisplayConfig {
            auto_restart: lookup("WORD_SEARCH_AUTO_RESTART")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("WORD_SEARCH_AUTO_RESTART must be true or false")?,
        };

        Ok(Config { game, display })
    }
}

impl GameConfig {
    pub fn generator(&self) -> GridGenerator {
        let policy = if self.strict_placement {
            PlacementPolicy::Strict
        } else {
            PlacementPolicy::Lenient
        };
        GridGenerator::new(self.max_attempts, policy)
    }
}

/// Split a comma-separated list, ignoring blank entries
pub fn parse_word_list(raw: &str) -> Result<WordList> {
    let list = WordList::new(raw.split(',').map(str::trim).filter(|w| !w.is_empty()))?;
    Ok(list)
}

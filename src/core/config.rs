//! Game configuration with documented limits
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the classic rules.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConquestError, Result};

/// Configuration for territory registration and the session RNG
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum characters kept from a territory name
    pub name_capacity: usize,

    /// Maximum characters kept from an army color (territory owner or player)
    pub color_capacity: usize,

    /// Troops given to a territory whose registered count is missing or below 1
    pub default_troops: u32,

    /// Upper bound on the number of territories a map may hold
    ///
    /// Guards the registration prompt against absurd sizes before the
    /// collection is reserved.
    pub max_territories: usize,

    /// Seed for the session RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name_capacity: 29,
            color_capacity: 9,
            default_troops: 1,
            max_territories: 64,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.name_capacity == 0 {
            return Err(ConquestError::Config("name_capacity must be at least 1".into()));
        }

        if self.color_capacity == 0 {
            return Err(ConquestError::Config("color_capacity must be at least 1".into()));
        }

        // A territory is always registered with at least one troop
        if self.default_troops == 0 {
            return Err(ConquestError::Config("default_troops must be at least 1".into()));
        }

        if self.max_territories == 0 {
            return Err(ConquestError::Config("max_territories must be at least 1".into()));
        }

        Ok(())
    }
}

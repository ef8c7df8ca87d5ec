//! Campaign-wide settings consumed by filters and the attack log.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_ATTACK_HORIZON_FRAMES, DEFAULT_CONTROLLER, DEFAULT_MAX_PLAYERS,
    DEFAULT_TICKS_PER_FRAME,
};

/// Failure raised while loading a [`CampaignConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The contents were not valid JSON for the config schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but violate a config invariant.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings describing the players and the game clock.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignConfig {
    /// Player index the filters treat as "self".
    pub controller: i32,
    /// Number of regular player slots.
    pub max_players: i32,
    /// Game-time units per frame.
    pub ticks_per_frame: u64,
    /// Frames an attack remains attributable.
    pub attack_horizon_frames: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            controller: DEFAULT_CONTROLLER,
            max_players: DEFAULT_MAX_PLAYERS,
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            attack_horizon_frames: DEFAULT_ATTACK_HORIZON_FRAMES,
        }
    }
}

impl CampaignConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when [`validate`](Self::validate) fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    ///
    /// # Errors
    /// Propagates I/O, parse and validation failures.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks the player layout and clock settings.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_players must be positive, got {}",
                self.max_players
            )));
        }
        if !(0..self.max_players).contains(&self.controller) {
            return Err(ConfigError::Invalid(format!(
                "controller {} outside 0..{}",
                self.controller, self.max_players
            )));
        }
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::Invalid("ticks_per_frame must be non-zero".into()));
        }
        Ok(())
    }

    /// Age in game-time units after which attacks are forgotten.
    #[must_use]
    pub const fn attack_horizon(&self) -> u64 {
        self.attack_horizon_frames.saturating_mul(self.ticks_per_frame)
    }
}

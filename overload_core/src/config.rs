//! Configuration file support for Overload.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/overload/config.toml`.
//! Every section is optional; missing values take the built-in defaults.

use crate::rules::{CYCLING_TARGET_REPS, MAX_REPS, MIN_REPS};
use crate::transition::{ExerciseTransition, TransitionTable};
use crate::{EquipmentSettings, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub equipment: EquipmentSettings,

    #[serde(default)]
    pub progression: ProgressionConfig,

    #[serde(default)]
    pub transitions: Vec<ExerciseTransition>,
}

/// Rep bounds and policy switches for the progression engine
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionConfig {
    #[serde(default = "default_min_reps")]
    pub min_reps: u32,

    #[serde(default = "default_max_reps")]
    pub max_reps: u32,

    #[serde(default = "default_cycling_target_reps")]
    pub cycling_target_reps: u32,

    /// Let hypertrophy compounds trade weight for reps instead of always
    /// taking the strength path
    #[serde(default)]
    pub compound_rep_progression: bool,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            min_reps: default_min_reps(),
            max_reps: default_max_reps(),
            cycling_target_reps: default_cycling_target_reps(),
            compound_rep_progression: false,
        }
    }
}

fn default_min_reps() -> u32 {
    MIN_REPS
}

fn default_max_reps() -> u32 {
    MAX_REPS
}

fn default_cycling_target_reps() -> u32 {
    CYCLING_TARGET_REPS
}

impl ProgressionConfig {
    /// Check that the rep bounds describe a usable range
    pub fn validate(&self) -> Result<()> {
        if self.min_reps == 0 {
            return Err(Error::Config("min_reps must be at least 1".into()));
        }
        if self.min_reps > self.max_reps {
            return Err(Error::Config(format!(
                "min_reps ({}) exceeds max_reps ({})",
                self.min_reps, self.max_reps
            )));
        }
        if self.cycling_target_reps < self.min_reps || self.cycling_target_reps >= self.max_reps {
            return Err(Error::Config(format!(
                "cycling_target_reps ({}) must be within [{}, {})",
                self.cycling_target_reps, self.min_reps, self.max_reps
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_default()
        });
        base.join("overload").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.progression.validate()?;

        for transition in &self.transitions {
            if !(transition.weight_ceiling.is_finite() && transition.weight_ceiling > 0.0) {
                return Err(Error::Config(format!(
                    "transition for exercise {} has invalid weight_ceiling {}",
                    transition.exercise_id, transition.weight_ceiling
                )));
            }
        }
        Ok(())
    }

    /// Build the transition lookup declared in this config
    pub fn transition_table(&self) -> TransitionTable {
        self.transitions.iter().cloned().collect()
    }
}

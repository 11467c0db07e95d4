//! Driver configuration

use std::path::PathBuf;

use nh_core::{GameOptions, Seeds, SpawnOptions};
use serde::{Deserialize, Serialize};

use crate::error::{NethackError, Result};
use crate::observation::{ObsKey, Observation};
use crate::sync::AutoDismiss;

/// Session log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    pub enabled: bool,
    /// Directory the per-run directory is created in
    pub root: PathBuf,
    /// Write `.ttyrec.gz` instead of `.ttyrec`
    pub compress: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root: PathBuf::from("."),
            compress: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NethackConfig {
    pub observation_keys: Vec<String>,
    pub playername: String,
    pub character: String,
    /// Show the opening legacy text
    pub legacy: bool,
    pub hunger: bool,
    pub spawn: SpawnOptions,
    /// Seeds used by `reset(None)`; fresh entropy when unset
    pub seeds: Option<Seeds>,
    pub recorder: RecorderConfig,
    pub auto_dismiss: AutoDismiss,
}

impl Default for NethackConfig {
    fn default() -> Self {
        let game = GameOptions::default();
        Self {
            observation_keys: ObsKey::all().iter().map(ToString::to_string).collect(),
            playername: game.playername,
            character: game.character,
            legacy: game.legacy,
            hunger: game.hunger,
            spawn: game.spawn,
            seeds: None,
            recorder: RecorderConfig::default(),
            auto_dismiss: AutoDismiss::default(),
        }
    }
}

impl NethackConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NethackError::InvalidConfig(e.to_string()))
    }

    pub fn with_observation_keys<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.observation_keys = keys.iter().map(|k| k.as_ref().to_string()).collect();
        self
    }

    pub fn with_playername(mut self, name: impl Into<String>) -> Self {
        self.playername = name.into();
        self
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = character.into();
        self
    }

    pub fn with_legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn with_hunger(mut self, hunger: bool) -> Self {
        self.hunger = hunger;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnOptions) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_seeds(mut self, seeds: Seeds) -> Self {
        self.seeds = Some(seeds);
        self
    }

    pub fn with_recorder(mut self, root: impl Into<PathBuf>, compress: bool) -> Self {
        self.recorder = RecorderConfig {
            enabled: true,
            root: root.into(),
            compress,
        };
        self
    }

    pub fn without_recorder(mut self) -> Self {
        self.recorder.enabled = false;
        self
    }

    pub fn with_auto_dismiss(mut self, policy: AutoDismiss) -> Self {
        self.auto_dismiss = policy;
        self
    }

    /// Options handed to the engine on every reset
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            playername: self.playername.clone(),
            character: self.character.clone(),
            legacy: self.legacy,
            hunger: self.hunger,
            spawn: self.spawn,
        }
    }

    /// Check everything that can be checked before a game starts.
    pub fn validate(&self) -> Result<()> {
        Observation::new(&self.observation_keys)?;
        self.game_options()
            .validate()
            .map_err(|e| NethackError::InvalidConfig(e.to_string()))?;
        if self.spawn.initial_min > self.spawn.initial_max {
            return Err(NethackError::InvalidConfig(format!(
                "spawn.initial_min {} exceeds spawn.initial_max {}",
                self.spawn.initial_min, self.spawn.initial_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NethackConfig::default();
        assert_eq!(config.observation_keys.len(), 7);
        assert_eq!(config.observation_keys[0], "glyphs");
        assert_eq!(config.playername, "Agent");
        assert_eq!(config.auto_dismiss, AutoDismiss::DEATH_SCREENS);
        assert!(config.recorder.enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_builder() {
        let config = NethackConfig::default()
            .with_observation_keys(&["chars"])
            .with_playername("Bob")
            .with_seeds(Seeds::new(1, 2))
            .without_recorder()
            .with_auto_dismiss(AutoDismiss::all());
        assert_eq!(config.game_options().playername, "Bob");
        assert_eq!(config.seeds, Some(Seeds::new(1, 2)));
        assert!(!config.recorder.enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid() {
        let bad_key = NethackConfig::default().with_observation_keys(&["pixels"]);
        assert!(matches!(
            bad_key.validate(),
            Err(NethackError::UnknownObservationKey(_))
        ));
        let bad_role = NethackConfig::default().with_character("xyz-hum-neu-mal");
        assert!(matches!(bad_role.validate(), Err(NethackError::InvalidConfig(_))));
        let bad_spawn = NethackConfig::default().with_spawn(SpawnOptions {
            initial_min: 4,
            initial_max: 1,
            rate: 0,
        });
        assert!(bad_spawn.validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let config = NethackConfig::from_json(
            r#"{"playername": "Rob", "recorder": {"compress": true}, "observation_keys": ["blstats"]}"#,
        )
        .unwrap();
        assert_eq!(config.playername, "Rob");
        assert!(config.recorder.enabled);
        assert!(config.recorder.compress);
        assert_eq!(config.character, "mon-hum-neu-mal");
        assert!(NethackConfig::from_json("{\"legacy\": 3}").is_err());
    }
}

//! Game options
//!
//! Everything that shapes a new game apart from its seeds. Options are plain
//! serde data so callers can keep them in a config file.

use nh_data::Character;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Longest accepted player name (PL_NSIZ - 1)
pub const PL_NSIZ: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub playername: String,
    /// Character selection as `role-race-align-gender`, e.g. `mon-hum-neu-mal`
    pub character: String,
    /// Show the opening legacy text before the first turn
    pub legacy: bool,
    /// Hunger clock runs
    pub hunger: bool,
    pub spawn: SpawnOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            playername: "Agent".to_string(),
            character: "mon-hum-neu-mal".to_string(),
            legacy: true,
            hunger: true,
            spawn: SpawnOptions::default(),
        }
    }
}

impl GameOptions {
    /// Check the options and resolve the character selection.
    pub fn validate(&self) -> Result<Character> {
        let name = self.playername.as_str();
        if name.is_empty()
            || name.len() > PL_NSIZ
            || name.chars().any(|c| c.is_control() || !c.is_ascii())
        {
            return Err(EngineError::BadName(self.playername.clone()));
        }
        Ok(Character::parse(&self.character)?)
    }
}

/// Monster population settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnOptions {
    /// Monsters placed on a new level
    pub initial_min: u32,
    pub initial_max: u32,
    /// A new monster arrives with chance 1/rate each turn; 0 disables it
    pub rate: u32,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            initial_min: 2,
            initial_max: 5,
            rate: 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        let c = GameOptions::default().validate().unwrap();
        assert_eq!(c.describe(), "neutral male human Monk");
    }

    #[test]
    fn test_bad_name() {
        let mut opts = GameOptions::default();
        opts.playername = String::new();
        assert!(matches!(opts.validate(), Err(EngineError::BadName(_))));
        opts.playername = "a\tb".into();
        assert!(matches!(opts.validate(), Err(EngineError::BadName(_))));
        opts.playername = "x".repeat(PL_NSIZ + 1);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_bad_character() {
        let opts = GameOptions {
            character: "mon-orc-neu-mal".into(),
            ..GameOptions::default()
        };
        assert!(matches!(opts.validate(), Err(EngineError::BadOptions(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: GameOptions = serde_json::from_str(r#"{"playername":"Bob"}"#).unwrap();
        assert_eq!(opts.playername, "Bob");
        assert!(opts.legacy);
        assert_eq!(opts.spawn, SpawnOptions::default());
    }
}

//! nh-core: a steppable NetHack-style game engine
//!
//! The game runs one key at a time. Every place where it would block on the
//! terminal (the command prompt, `--More--`, menus, y/n questions, getline)
//! is an explicit state, so a caller can feed a key, let the engine run until
//! it needs the next one, and read a consistent snapshot of its memory.

mod cmd;
mod display;
pub mod error;
mod game;
pub mod level;
pub mod memory;
pub mod monster;
pub mod obj;
pub mod options;
pub mod player;
mod rng;
mod tty;
pub mod window;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use error::{EngineError, Result};
pub use game::NetHackEngine;
pub use memory::EngineMemory;
pub use options::{GameOptions, SpawnOptions};
pub use rng::{GameRng, Seeds};
pub use window::WindowStatus;

/// Version string reported by `#version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Why a game ended
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum HowDone {
    Died,
    Starved,
    Quit,
    Escaped,
}

impl HowDone {
    /// Code stored in the `how_done` internal slot
    pub const fn code(&self) -> i32 {
        match self {
            HowDone::Died => 0,
            HowDone::Starved => 3,
            HowDone::Quit => 13,
            HowDone::Escaped => 14,
        }
    }
}

/// A game that advances one key at a time.
///
/// `feed` returns once the game needs another key or has finished; between
/// calls the memory is quiescent and safe to read.
pub trait Engine {
    /// Start a fresh game, discarding any game in progress.
    fn new_game(&mut self, options: &GameOptions, seeds: Seeds) -> Result<()>;

    /// Resume the current wait with one key.
    fn feed(&mut self, key: u8) -> Result<()>;

    fn window_status(&self) -> WindowStatus;

    fn memory(&self) -> EngineMemory<'_>;

    /// Terminal bytes produced since the last call
    fn drain_output(&mut self) -> Vec<u8>;

    fn how_done(&self) -> Option<HowDone>;
}

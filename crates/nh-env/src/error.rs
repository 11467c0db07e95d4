//! Driver errors

use std::path::PathBuf;

use nh_core::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NethackError {
    #[error("cannot have more than one NetHack instance running")]
    Conflict,

    #[error("action {0} is not in the action catalog")]
    InvalidAction(u32),

    #[error("no active session: call reset() first")]
    InactiveSession,

    #[error("the episode is over: call reset() to start another")]
    EpisodeFinished,

    #[error("unknown observation key {0:?}")]
    UnknownObservationKey(String),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NethackError>;

/// Session log failures. These are logged by the driver and never abort
/// a step.
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("session log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session log already closed")]
    Closed,
}

//! Engine errors

use nh_data::LookupError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid character selection: {0}")]
    BadOptions(#[from] LookupError),

    #[error("invalid player name {0:?}")]
    BadName(String),

    #[error("no game has been started")]
    NotStarted,

    #[error("the game is over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, EngineError>;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: grid size must be at least 2")]
    InvalidConfiguration,
    #[error("Coordinates outside the grid")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;

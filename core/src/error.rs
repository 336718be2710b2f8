use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout does not match the requested mine count")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game still in progress, the board cannot be uncovered yet")]
    InProgress,
}

pub type Result<T> = core::result::Result<T, GameError>;

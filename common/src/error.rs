use thiserror::Error;

/// Failures surfaced by the board, the search and the game state machine.
///
/// Every operation that returns one of these leaves the board exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {index} is already occupied")]
    OccupiedCell { index: usize },

    #[error("cell index {index} is out of range (expected 0..=8)")]
    OutOfRange { index: usize },

    #[error("no moves available")]
    NoMovesAvailable,

    #[error("game is already over")]
    GameOver,
}

pub type GameResult<T> = Result<T, GameError>;

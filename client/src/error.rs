use thiserror::Error;
use tictactoe_common::GameError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{0}")]
    Config(String),

    #[error("input closed before the game finished")]
    InputClosed,
}

pub type ClientResult<T> = Result<T, ClientError>;

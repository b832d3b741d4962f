//! Errors raised while producing commentary.

use chess_oracle::{FenError, InvalidSquareError};
use thiserror::Error;

use crate::engine::EngineResponseError;

/// Errors that can occur while describing moves or rendering reports.
#[derive(Error, Debug)]
pub enum CommentaryError {
    /// The FEN could not be loaded as a playable board.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
    /// The move is malformed or not legal in the position.
    #[error("Illegal or malformed move: {0}")]
    IllegalMove(String),
    /// A square label could not be parsed.
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquareError),
    /// The FEN placement could not be parsed.
    #[error(transparent)]
    Fen(#[from] FenError),
    /// The engine response could not be used.
    #[error(transparent)]
    Engine(#[from] EngineResponseError),
}

//! Error types for board queries and position parsing.

use thiserror::Error;

/// A square label that does not name one of the 64 board squares.
///
/// Carries the label exactly as the caller supplied it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square: '{0}'")]
pub struct InvalidSquareError(pub String);

/// Errors that can occur when parsing a FEN string into a [`crate::Position`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

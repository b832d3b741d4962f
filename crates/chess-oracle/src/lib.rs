//! Board queries for chess position analysis.
//!
//! This crate provides the narrow interface the analyzers are written against:
//! - [`BoardOracle`] - piece lookup, pawn enumeration and square attackers
//! - [`Position`] - an immutable piece-placement snapshot parsed from FEN
//! - [`ColoredPiece`] and the [`piece_value`] lookup table
//! - [`parse_square`] and [`square_label`] for algebraic square labels
//!
//! Square, file, rank, piece and color types, as well as the attack tables,
//! come from [`cozy_chess`] and are re-exported so every crate in the
//! workspace shares a single set of board types.
//!
//! # Example
//!
//! ```
//! use chess_oracle::{parse_square, BoardOracle, Color, Position};
//!
//! let position = Position::startpos();
//! let f3 = parse_square("f3").unwrap();
//! let attackers = position.attackers_of(f3, Color::White);
//! // e2 and g2 pawns plus the g1 knight
//! assert_eq!(attackers.len(), 3);
//! ```

mod error;
mod fen;
mod oracle;
mod piece;
mod position;
mod square;

pub use cozy_chess::{BitBoard, Color, File, Piece, Rank, Square};
pub use error::{FenError, InvalidSquareError};
pub use oracle::BoardOracle;
pub use piece::{color_name, piece_name, piece_value, ColoredPiece, PIECE_VALUES};
pub use position::Position;
pub use square::{parse_square, square_label};

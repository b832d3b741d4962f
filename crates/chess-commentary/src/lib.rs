//! Natural-language commentary for chess positions.
//!
//! Builds readable text on top of the analyses in `chess-analysis`:
//!
//! - [`describe_move`] - "White knight from g1 to f3, giving check"
//! - [`summarize_evaluation`] - "White has a clear advantage (+1.75)."
//! - [`summarize_best_move`] and [`comment_line`] - engine suggestions and
//!   numbered lines
//! - [`pawn_structure_report`] and [`control_report`] - multi-line reports
//! - [`EngineResponse`] - the JSON answer of the remote evaluation service
//! - [`CommentaryConfig`] - settings loaded from `commentary.toml`
//!
//! # Example
//!
//! ```
//! use chess_commentary::{describe_move, parse_board};
//!
//! let board = parse_board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
//! assert_eq!(describe_move(&board, "g1f3").unwrap(), "White knight from g1 to f3");
//! ```

pub mod config;
pub mod describe;
pub mod engine;
pub mod error;
pub mod report;

pub use config::{CommentaryConfig, ConfigError};
pub use describe::{describe_legal_move, describe_move, find_move, parse_board, uci_notation};
pub use engine::{parse_bestmove, EngineAnalysis, EngineResponse, EngineResponseError};
pub use error::CommentaryError;
pub use report::{
    comment_line, control_report, engine_commentary, pawn_structure_report, summarize_best_move,
    summarize_evaluation,
};

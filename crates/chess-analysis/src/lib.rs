//! Chess position analysis over a [`BoardOracle`].
//!
//! This crate provides the analyses behind the commentary layer:
//!
//! # Overview
//!
//! - [`analyze_pawn_structure`] - Doubled, isolated and passed pawns per side
//! - [`analyze_square_control`] - Attackers, defenders and material-weighted
//!   control of a square
//! - [`Evaluation`] - Position evaluation (centipawn or mate score) and its
//!   qualitative [`Advantage`]
//!
//! Both analyses are pure functions of an immutable position: they hold no
//! state and are safe to call from any number of threads.
//!
//! # Example
//!
//! ```
//! use chess_analysis::{analyze_pawn_structure, analyze_square_control, ControlBalance};
//! use chess_oracle::Position;
//!
//! let position = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
//!
//! let pawns = analyze_pawn_structure(&position);
//! assert_eq!(pawns.white.isolated, pawns.white.positions);
//!
//! let control = analyze_square_control(&position, "d3").unwrap();
//! assert_eq!(control.balance(), ControlBalance::Winning(chess_oracle::Color::White));
//! ```
//!
//! [`BoardOracle`]: chess_oracle::BoardOracle

pub mod control;
pub mod evaluation;
pub mod pawns;

pub use control::{
    analyze_square_control, analyze_square_control_at, Attacker, ControlBalance, ControlReport,
    ControlRole,
};
pub use evaluation::{Advantage, AdvantageThresholds, Evaluation};
pub use pawns::{
    analyze_pawn_structure, analyze_pawn_structure_with, PassedPawnRule, PawnFeatures,
    PawnStructure,
};

//! Pawn structure classification.
//!
//! Every pawn of each side is checked against three independent predicates:
//! doubled, isolated and passed. A pawn may satisfy any combination of them,
//! including all three (a lone pair of pawns on an open file is both doubled
//! and isolated).

use chess_oracle::{BoardOracle, Color, ColoredPiece, Piece, Rank, Square};
use serde::{Deserialize, Serialize};

/// Which squares are checked for enemy pawns when deciding if a pawn is passed.
///
/// Neither rule looks at adjacent files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassedPawnRule {
    /// Passed when no enemy pawn stands anywhere on the pawn's file,
    /// including behind it.
    #[default]
    FileClear,
    /// Passed when no enemy pawn stands on the pawn's file strictly ahead of
    /// it in its direction of advance.
    Directional,
}

/// Classified pawns of one side.
///
/// `positions` lists every pawn in oracle order; the other three lists are
/// subsets of it, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PawnFeatures {
    pub positions: Vec<Square>,
    pub doubled: Vec<Square>,
    pub isolated: Vec<Square>,
    pub passed: Vec<Square>,
}

/// Pawn features for both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PawnStructure {
    pub white: PawnFeatures,
    pub black: PawnFeatures,
}

impl PawnStructure {
    /// Returns the features of one side.
    pub fn side(&self, color: Color) -> &PawnFeatures {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// Classifies the pawns of both sides using [`PassedPawnRule::FileClear`].
pub fn analyze_pawn_structure<O: BoardOracle + ?Sized>(oracle: &O) -> PawnStructure {
    analyze_pawn_structure_with(oracle, PassedPawnRule::default())
}

/// Classifies the pawns of both sides with an explicit passed-pawn rule.
pub fn analyze_pawn_structure_with<O: BoardOracle + ?Sized>(
    oracle: &O,
    rule: PassedPawnRule,
) -> PawnStructure {
    PawnStructure {
        white: classify_side(oracle, Color::White, rule),
        black: classify_side(oracle, Color::Black, rule),
    }
}

fn classify_side<O: BoardOracle + ?Sized>(
    oracle: &O,
    color: Color,
    rule: PassedPawnRule,
) -> PawnFeatures {
    let positions = oracle.pawns_of(color);

    let mut file_counts = [0usize; 8];
    for square in &positions {
        file_counts[square.file() as usize] += 1;
    }

    let mut features = PawnFeatures::default();
    for &square in &positions {
        let file = square.file() as usize;

        if file_counts[file] > 1 {
            features.doubled.push(square);
        }

        let left = file > 0 && file_counts[file - 1] > 0;
        let right = file < 7 && file_counts[file + 1] > 0;
        if !left && !right {
            features.isolated.push(square);
        }

        if is_passed(oracle, square, color, rule) {
            features.passed.push(square);
        }
    }
    features.positions = positions;
    features
}

fn is_passed<O: BoardOracle + ?Sized>(
    oracle: &O,
    square: Square,
    color: Color,
    rule: PassedPawnRule,
) -> bool {
    let enemy_pawn = ColoredPiece::new(Piece::Pawn, !color);
    let pawn_rank = square.rank() as usize;

    (0..8)
        .filter(|&rank| match rule {
            PassedPawnRule::FileClear => true,
            PassedPawnRule::Directional => match color {
                Color::White => rank > pawn_rank,
                Color::Black => rank < pawn_rank,
            },
        })
        .map(|rank| Square::new(square.file(), Rank::index(rank)))
        .all(|sq| oracle.piece_at(sq) != Some(enemy_pawn))
}

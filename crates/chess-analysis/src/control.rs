//! Square control: who attacks and who defends a square.
//!
//! Each side's control score is the sum of the material values of its pieces
//! attacking the target square. Pieces are then split by role relative to
//! the occupant: pieces of the occupant's color defend it, everything else
//! attacks it. On an empty square every piece is an attacker.

use std::fmt;

use chess_oracle::{
    parse_square, BoardOracle, Color, ColoredPiece, InvalidSquareError, Square,
};

/// A piece bearing on the target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attacker {
    pub square: Square,
    pub piece: ColoredPiece,
}

impl Attacker {
    /// Material value of the attacking piece.
    pub fn value(&self) -> u32 {
        self.piece.value()
    }
}

/// Formats as "black knight on f6".
impl fmt::Display for Attacker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}",
            self.piece,
            chess_oracle::square_label(self.square)
        )
    }
}

/// Role of a piece relative to the occupant of the target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    Attacker,
    Defender,
}

/// Which side holds more control over the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlBalance {
    /// One side has a strictly higher control score.
    Winning(Color),
    /// Both scores are equal.
    Even,
}

impl fmt::Display for ControlBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlBalance::Winning(Color::White) => write!(f, "White is winning"),
            ControlBalance::Winning(Color::Black) => write!(f, "Black is winning"),
            ControlBalance::Even => write!(f, "evenly contested"),
        }
    }
}

/// Occupant, attackers and control scores for one square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlReport {
    pub target: Square,
    /// `None` when the square is empty.
    pub occupant: Option<ColoredPiece>,
    pub white: Vec<Attacker>,
    pub black: Vec<Attacker>,
    pub white_score: u32,
    pub black_score: u32,
}

impl ControlReport {
    /// Returns the pieces of `color` bearing on the square.
    pub fn pieces_of(&self, color: Color) -> &[Attacker] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns the control score of `color`.
    pub fn score(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    /// Classifies a piece as attacker or defender of the occupant.
    pub fn role_of(&self, piece: &Attacker) -> ControlRole {
        match self.occupant {
            Some(occupant) if occupant.color == piece.piece.color => ControlRole::Defender,
            _ => ControlRole::Attacker,
        }
    }

    /// Pieces attacking the square, white first.
    pub fn attackers(&self) -> impl Iterator<Item = &Attacker> + '_ {
        self.with_role(ControlRole::Attacker)
    }

    /// Pieces defending the occupant, white first. Empty for an empty square.
    pub fn defenders(&self) -> impl Iterator<Item = &Attacker> + '_ {
        self.with_role(ControlRole::Defender)
    }

    fn with_role(&self, role: ControlRole) -> impl Iterator<Item = &Attacker> + '_ {
        self.white
            .iter()
            .chain(self.black.iter())
            .filter(move |piece| self.role_of(piece) == role)
    }

    /// Compares the two control scores.
    pub fn balance(&self) -> ControlBalance {
        use std::cmp::Ordering;

        match self.white_score.cmp(&self.black_score) {
            Ordering::Greater => ControlBalance::Winning(Color::White),
            Ordering::Less => ControlBalance::Winning(Color::Black),
            Ordering::Equal => ControlBalance::Even,
        }
    }
}

/// Analyzes control of the square named by `label` (e.g., "e4").
///
/// # Errors
///
/// Returns [`InvalidSquareError`] when `label` is not a board square.
pub fn analyze_square_control<O: BoardOracle + ?Sized>(
    oracle: &O,
    label: &str,
) -> Result<ControlReport, InvalidSquareError> {
    let target = parse_square(label)?;
    Ok(analyze_square_control_at(oracle, target))
}

/// Analyzes control of `target`.
pub fn analyze_square_control_at<O: BoardOracle + ?Sized>(
    oracle: &O,
    target: Square,
) -> ControlReport {
    let white = collect_pieces(oracle, target, Color::White);
    let black = collect_pieces(oracle, target, Color::Black);

    ControlReport {
        target,
        occupant: oracle.piece_at(target),
        white_score: white.iter().map(Attacker::value).sum(),
        black_score: black.iter().map(Attacker::value).sum(),
        white,
        black,
    }
}

fn collect_pieces<O: BoardOracle + ?Sized>(
    oracle: &O,
    target: Square,
    color: Color,
) -> Vec<Attacker> {
    oracle
        .attackers_of(target, color)
        .into_iter()
        .filter_map(|square| {
            oracle
                .piece_at(square)
                .map(|piece| Attacker { square, piece })
        })
        .collect()
}

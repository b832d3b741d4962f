//! Chess position evaluation types.

use std::fmt;

use chess_oracle::Color;
use serde::{Deserialize, Serialize};

/// Represents a chess position evaluation from White's point of view.
///
/// Evaluations can be either centipawn scores (for normal positions)
/// or mate scores (when a forced mate is found).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Centipawn evaluation (positive = white advantage)
    Centipawns(i32),
    /// Mate in N moves (positive = white wins, negative = black wins)
    Mate(i32),
}

impl Evaluation {
    /// Builds an evaluation from UCI `score cp` / `score mate` values.
    ///
    /// A mate score takes precedence over a centipawn score. Returns `None`
    /// when neither is present.
    pub fn from_uci_score(cp: Option<i32>, mate: Option<i32>) -> Option<Self> {
        match (mate, cp) {
            (Some(m), _) => Some(Evaluation::Mate(m)),
            (None, Some(c)) => Some(Evaluation::Centipawns(c)),
            (None, None) => None,
        }
    }

    /// Converts a score in pawns to whole centipawns, rounding to nearest.
    pub fn pawns_to_centipawns(pawns: f64) -> i32 {
        (pawns * 100.0).round() as i32
    }

    /// Classifies the evaluation into a qualitative advantage.
    ///
    /// `Mate(0)` carries no sign and is attributed to White.
    pub fn advantage(&self, thresholds: &AdvantageThresholds) -> Advantage {
        match *self {
            Evaluation::Mate(moves) => Advantage::Mate {
                winner: if moves < 0 { Color::Black } else { Color::White },
                moves: moves.unsigned_abs(),
            },
            Evaluation::Centipawns(cp) => {
                let side = if cp < 0 { Color::Black } else { Color::White };
                let magnitude = cp.saturating_abs();
                if magnitude >= thresholds.decisive_cp {
                    Advantage::Decisive(side)
                } else if magnitude >= thresholds.clear_cp {
                    Advantage::Clear(side)
                } else if magnitude >= thresholds.slight_cp {
                    Advantage::Slight(side)
                } else {
                    Advantage::Equal
                }
            }
        }
    }
}

/// Formats as `+0.35`, `-1.20`, `0.00`, `M3` or `-M2`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Evaluation::Centipawns(0) => write!(f, "0.00"),
            Evaluation::Centipawns(cp) => {
                let sign = if cp > 0 { '+' } else { '-' };
                let abs = cp.unsigned_abs();
                write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
            }
            Evaluation::Mate(moves) if moves < 0 => write!(f, "-M{}", moves.unsigned_abs()),
            Evaluation::Mate(moves) => write!(f, "M{}", moves),
        }
    }
}

/// Qualitative reading of an [`Evaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    Equal,
    Slight(Color),
    Clear(Color),
    Decisive(Color),
    Mate { winner: Color, moves: u32 },
}

/// Centipawn boundaries between the [`Advantage`] levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvantageThresholds {
    /// Smallest score counted as a slight edge.
    pub slight_cp: i32,
    /// Smallest score counted as a clear advantage.
    pub clear_cp: i32,
    /// Smallest score counted as decisive.
    pub decisive_cp: i32,
}

impl Default for AdvantageThresholds {
    fn default() -> Self {
        Self {
            slight_cp: 50,
            clear_cp: 150,
            decisive_cp: 400,
        }
    }
}

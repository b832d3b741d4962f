//! Colored pieces and the fixed piece tables.

use std::fmt;

use cozy_chess::{Color, Piece};

/// Material value of each piece type, indexed by `Piece as usize`
/// (pawn, knight, bishop, rook, queen, king).
pub const PIECE_VALUES: [u32; 6] = [1, 3, 3, 5, 9, 0];

const PIECE_NAMES: [&str; 6] = ["pawn", "knight", "bishop", "rook", "queen", "king"];

/// Returns the material value of a piece type. Kings are worth 0.
#[inline]
pub const fn piece_value(piece: Piece) -> u32 {
    PIECE_VALUES[piece as usize]
}

/// Returns the lowercase English name of a piece type.
#[inline]
pub const fn piece_name(piece: Piece) -> &'static str {
    PIECE_NAMES[piece as usize]
}

/// Returns the lowercase English name of a color.
#[inline]
pub const fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// A piece type together with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub piece: Piece,
    pub color: Color,
}

impl ColoredPiece {
    #[inline]
    pub const fn new(piece: Piece, color: Color) -> Self {
        Self { piece, color }
    }

    /// Material value of this piece.
    #[inline]
    pub const fn value(self) -> u32 {
        piece_value(self.piece)
    }

    /// Parses a FEN piece character (uppercase = white).
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some(Self::new(piece, color))
    }

    /// Returns the FEN character for this piece.
    pub const fn to_fen_char(self) -> char {
        let c = match self.piece {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Formats as "white knight".
impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", color_name(self.color), piece_name(self.piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_table() {
        assert_eq!(piece_value(Piece::Pawn), 1);
        assert_eq!(piece_value(Piece::Knight), 3);
        assert_eq!(piece_value(Piece::Bishop), 3);
        assert_eq!(piece_value(Piece::Rook), 5);
        assert_eq!(piece_value(Piece::Queen), 9);
        assert_eq!(piece_value(Piece::King), 0);
    }

    #[test]
    fn test_names_follow_piece_order() {
        let names: Vec<&str> = Piece::ALL.iter().map(|&p| piece_name(p)).collect();
        assert_eq!(
            names,
            vec!["pawn", "knight", "bishop", "rook", "queen", "king"]
        );
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(
            ColoredPiece::from_fen_char('N'),
            Some(ColoredPiece::new(Piece::Knight, Color::White))
        );
        assert_eq!(
            ColoredPiece::from_fen_char('q'),
            Some(ColoredPiece::new(Piece::Queen, Color::Black))
        );
        assert_eq!(ColoredPiece::from_fen_char('x'), None);
        assert_eq!(ColoredPiece::new(Piece::King, Color::White).to_fen_char(), 'K');
        assert_eq!(ColoredPiece::new(Piece::Pawn, Color::Black).to_fen_char(), 'p');
    }

    #[test]
    fn test_display() {
        let rook = ColoredPiece::new(Piece::Rook, Color::Black);
        assert_eq!(rook.to_string(), "black rook");
        assert_eq!(rook.value(), 5);
    }
}

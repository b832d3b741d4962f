//! Immutable piece-placement snapshot.

use std::fmt;
use std::str::FromStr;

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, File, Piece, Rank, Square,
};

use crate::{fen, BoardOracle, ColoredPiece, FenError};

/// A snapshot of piece placement and side to move.
///
/// Unlike a full game board, a `Position` does not need to be reachable in a
/// legal game: empty boards, missing kings or pawns on the back rank are all
/// accepted, since analysis only reads placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// One bitboard per piece type, indexed by `Piece as usize`.
    pieces: [BitBoard; 6],
    /// One bitboard per color, indexed by `Color as usize`.
    colors: [BitBoard; 2],
    side_to_move: Color,
}

impl Position {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Creates a position with no pieces, white to move.
    pub fn empty() -> Self {
        Self {
            pieces: [BitBoard::EMPTY; 6],
            colors: [BitBoard::EMPTY; 2],
            side_to_move: Color::White,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_board(&Board::default())
    }

    /// Parses a position from FEN.
    ///
    /// Only the piece placement field is required. See [`FenError`] for the
    /// failure cases.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = fen::parse(fen)?;
        Ok(Self {
            pieces: parsed.placement.pieces,
            colors: parsed.placement.colors,
            side_to_move: parsed.side_to_move,
        })
    }

    /// Takes a placement snapshot of a rules-library board.
    pub fn from_board(board: &Board) -> Self {
        let mut position = Self::empty();
        for piece in Piece::ALL {
            position.pieces[piece as usize] = board.pieces(piece);
        }
        for color in [Color::White, Color::Black] {
            position.colors[color as usize] = board.colors(color);
        }
        position.side_to_move = board.side_to_move();
        position
    }

    /// Returns a copy with `piece` placed on `square`, replacing any occupant.
    pub fn with_piece(mut self, square: Square, piece: ColoredPiece) -> Self {
        self.clear(square);
        self.pieces[piece.piece as usize] |= square.bitboard();
        self.colors[piece.color as usize] |= square.bitboard();
        self
    }

    /// Returns a copy with `square` emptied.
    pub fn without_piece(mut self, square: Square) -> Self {
        self.clear(square);
        self
    }

    fn clear(&mut self, square: Square) {
        let mask = !square.bitboard();
        for bb in self.pieces.iter_mut().chain(self.colors.iter_mut()) {
            *bb &= mask;
        }
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns all occupied squares.
    pub fn occupied(&self) -> BitBoard {
        self.colors[0] | self.colors[1]
    }

    /// Returns the squares holding `piece` of `color`.
    pub fn pieces_of(&self, piece: Piece, color: Color) -> BitBoard {
        self.pieces[piece as usize] & self.colors[color as usize]
    }

    /// Returns the squares of `color` pieces that attack `square`.
    fn attack_set(&self, square: Square, color: Color) -> BitBoard {
        let occupied = self.occupied();
        let diagonal = self.pieces_of(Piece::Bishop, color) | self.pieces_of(Piece::Queen, color);
        let orthogonal = self.pieces_of(Piece::Rook, color) | self.pieces_of(Piece::Queen, color);

        // A pawn of `color` attacks `square` from where a pawn of the other
        // color standing on `square` would attack.
        (get_pawn_attacks(square, !color) & self.pieces_of(Piece::Pawn, color))
            | (get_knight_moves(square) & self.pieces_of(Piece::Knight, color))
            | (get_bishop_moves(square, occupied) & diagonal)
            | (get_rook_moves(square, occupied) & orthogonal)
            | (get_king_moves(square) & self.pieces_of(Piece::King, color))
    }

    /// Returns the piece placement field of FEN for this position.
    pub fn placement_fen(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank_index in (0..8).rev() {
            let rank = Rank::index(rank_index);
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank_index > 0 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{} {}", self.placement_fen(), side)
    }
}

impl BoardOracle for Position {
    fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        let color = if self.colors[Color::White as usize].has(square) {
            Color::White
        } else if self.colors[Color::Black as usize].has(square) {
            Color::Black
        } else {
            return None;
        };
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces[piece as usize].has(square))
            .map(|piece| ColoredPiece::new(piece, color))
    }

    fn pawns_of(&self, color: Color) -> Vec<Square> {
        self.pieces_of(Piece::Pawn, color).into_iter().collect()
    }

    fn attackers_of(&self, square: Square, color: Color) -> Vec<Square> {
        self.attack_set(square, color).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        crate::parse_square(label).unwrap()
    }

    #[test]
    fn test_startpos_matches_fen() {
        assert_eq!(Position::startpos(), Position::from_fen(Position::STARTPOS).unwrap());
        assert_eq!(Position::default(), Position::startpos());
        assert_eq!(Position::startpos().side_to_move(), Color::White);
    }

    #[test]
    fn test_startpos_piece_at() {
        let position = Position::startpos();
        assert_eq!(
            position.piece_at(Square::E1),
            Some(ColoredPiece::new(Piece::King, Color::White))
        );
        assert_eq!(
            position.piece_at(Square::D8),
            Some(ColoredPiece::new(Piece::Queen, Color::Black))
        );
        assert_eq!(position.piece_at(Square::E4), None);
    }

    #[test]
    fn test_pawns_of_in_square_order() {
        let position = Position::from_fen("4k3/pp6/8/8/4P3/8/3P4/4K3 w - - 0 1").unwrap();
        assert_eq!(position.pawns_of(Color::White), vec![sq("d2"), sq("e4")]);
        assert_eq!(position.pawns_of(Color::Black), vec![sq("a7"), sq("b7")]);
    }

    #[test]
    fn test_startpos_attackers() {
        let position = Position::startpos();
        assert_eq!(
            position.attackers_of(sq("f3"), Color::White),
            vec![sq("g1"), sq("e2"), sq("g2")]
        );
        assert!(position.attackers_of(sq("e4"), Color::White).is_empty());
        assert_eq!(
            position.attackers_of(sq("c6"), Color::Black),
            vec![sq("b7"), sq("d7"), sq("b8")]
        );
    }

    #[test]
    fn test_sliders_are_blocked() {
        // Rook on a1 looks up the a-file, blocked by the pawn on a4.
        let position = Position::from_fen("4k3/8/8/8/P7/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(position.attackers_of(sq("a3"), Color::White), vec![sq("a1")]);
        assert!(position.attackers_of(sq("a6"), Color::White).is_empty());
    }

    #[test]
    fn test_occupant_does_not_affect_attackers() {
        let position = Position::from_fen("4k3/8/8/3n4/8/4R3/8/4K3 w - - 0 1").unwrap();
        // The rook on e3 does not attack its own square.
        assert_eq!(position.attackers_of(sq("e3"), Color::Black), vec![sq("d5")]);
        assert!(position.attackers_of(sq("e3"), Color::White).is_empty());
        assert_eq!(position.attackers_of(sq("e2"), Color::White), vec![sq("e1"), sq("e3")]);
    }

    #[test]
    fn test_queen_attacks_both_ways() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        assert_eq!(position.attackers_of(sq("d4"), Color::White), vec![sq("a1")]);
        assert_eq!(position.attackers_of(sq("a8"), Color::White), vec![sq("a1")]);
    }

    #[test]
    fn test_black_pawn_attacks_downward() {
        let position = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(position.attackers_of(sq("e4"), Color::Black), vec![sq("d5")]);
        assert!(position.attackers_of(sq("e6"), Color::Black).is_empty());
    }

    #[test]
    fn test_empty_board_has_no_attackers() {
        let position = Position::empty();
        for square in Square::ALL {
            assert!(position.piece_at(square).is_none());
            assert!(position.attackers_of(square, Color::White).is_empty());
            assert!(position.attackers_of(square, Color::Black).is_empty());
        }
    }

    #[test]
    fn test_with_and_without_piece() {
        let knight = ColoredPiece::new(Piece::Knight, Color::Black);
        let position = Position::startpos().with_piece(Square::E2, knight);
        assert_eq!(position.piece_at(Square::E2), Some(knight));
        assert_eq!(position.pawns_of(Color::White).len(), 7);

        let position = position.without_piece(Square::E2);
        assert_eq!(position.piece_at(Square::E2), None);
    }

    #[test]
    fn test_placement_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let position = Position::from_fen(&format!("{} b KQkq - 2 3", fen)).unwrap();
        assert_eq!(position.placement_fen(), fen);
        assert_eq!(position.to_string(), format!("{} b", fen));
        assert_eq!(Position::empty().placement_fen(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_from_board_matches_fen() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3";
        let board = Board::from_fen(fen, false).unwrap();
        assert_eq!(Position::from_board(&board), Position::from_fen(fen).unwrap());
    }

    #[test]
    fn test_parse_via_from_str() {
        let position: Position = "8/8/8/8/8/8/8/8 b".parse().unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert!(position.occupied().is_empty());
    }
}

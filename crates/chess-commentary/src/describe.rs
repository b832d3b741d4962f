//! Plain-English descriptions of moves.
//!
//! Moves are given in UCI notation. Castling is accepted both as the
//! standard king move (`e1g1`) and as king-takes-rook (`e1h1`), which is
//! how the rules library encodes it internally.

use chess_oracle::{color_name, piece_name, square_label, ColoredPiece};
use cozy_chess::{Board, Color, File, Move, Piece, Square};

use crate::error::CommentaryError;

/// Loads a full FEN into a playable board.
pub fn parse_board(fen: &str) -> Result<Board, CommentaryError> {
    Board::from_fen(fen.trim(), false).map_err(|e| CommentaryError::InvalidBoard(format!("{e:?}")))
}

/// Finds the legal move matching `uci` in `board`.
///
/// # Errors
///
/// Returns [`CommentaryError::IllegalMove`] if the text is not a legal move.
pub fn find_move(board: &Board, uci: &str) -> Result<Move, CommentaryError> {
    let wanted = uci.trim().to_ascii_lowercase();
    let mut found = None;

    board.generate_moves(|moves| {
        for mv in moves {
            if uci_notation(board, mv) == wanted || internal_notation(mv) == wanted {
                found = Some(mv);
                return true;
            }
        }
        false
    });

    found.ok_or_else(|| CommentaryError::IllegalMove(uci.to_string()))
}

/// Describes the move `uci` played in `board`.
pub fn describe_move(board: &Board, uci: &str) -> Result<String, CommentaryError> {
    let mv = find_move(board, uci)?;
    Ok(describe_legal_move(board, mv))
}

/// Standard UCI text for a legal move, with castling as a two-square king move.
pub fn uci_notation(board: &Board, mv: Move) -> String {
    let to = match castle_side(board, mv) {
        Some(side) => Square::new(side.king_file(), mv.from.rank()),
        None => mv.to,
    };
    with_promotion(format!("{}{}", square_label(mv.from), square_label(to)), mv)
}

fn internal_notation(mv: Move) -> String {
    with_promotion(format!("{}{}", square_label(mv.from), square_label(mv.to)), mv)
}

fn with_promotion(mut text: String, mv: Move) -> String {
    if let Some(piece) = mv.promotion {
        text.push(ColoredPiece::new(piece, Color::Black).to_fen_char());
    }
    text
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    fn king_file(self) -> File {
        match self {
            CastleSide::Kingside => File::G,
            CastleSide::Queenside => File::C,
        }
    }

    fn name(self) -> &'static str {
        match self {
            CastleSide::Kingside => "kingside",
            CastleSide::Queenside => "queenside",
        }
    }
}

fn castle_side(board: &Board, mv: Move) -> Option<CastleSide> {
    let is_castle = board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == Some(board.side_to_move());
    if !is_castle {
        return None;
    }
    if mv.to.file() as usize > mv.from.file() as usize {
        Some(CastleSide::Kingside)
    } else {
        Some(CastleSide::Queenside)
    }
}

pub(crate) fn side_title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Describes a move already known to be legal in `board`.
pub fn describe_legal_move(board: &Board, mv: Move) -> String {
    let mover = board.side_to_move();
    let side = side_title(mover);

    let mut text = match castle_side(board, mv) {
        Some(castle) => format!("{} castles {}", side, castle.name()),
        None => {
            let piece = board.piece_on(mv.from);
            let moving = piece.map(piece_name).unwrap_or("piece");
            let from = square_label(mv.from);
            let to = square_label(mv.to);
            let opponent = color_name(!mover);

            let en_passant = piece == Some(Piece::Pawn)
                && mv.from.file() != mv.to.file()
                && board.piece_on(mv.to).is_none();

            match board.piece_on(mv.to) {
                Some(captured) => format!(
                    "{} {} from {} captures {} {} on {}",
                    side,
                    moving,
                    from,
                    opponent,
                    piece_name(captured),
                    to
                ),
                None if en_passant => format!(
                    "{} {} from {} captures {} pawn en passant on {}",
                    side, moving, from, opponent, to
                ),
                None => format!("{} {} from {} to {}", side, moving, from, to),
            }
        }
    };

    if let Some(promoted) = mv.promotion {
        text.push_str(&format!(" and promotes to a {}", piece_name(promoted)));
    }

    let mut after = board.clone();
    after.play(mv);
    let has_moves = after.generate_moves(|moves| !moves.is_empty());
    let in_check = !after.checkers().is_empty();

    match (in_check, has_moves) {
        (true, false) => text.push_str(", delivering checkmate"),
        (true, true) => text.push_str(", giving check"),
        (false, false) => text.push_str(", leading to stalemate"),
        (false, true) => {}
    }

    text
}

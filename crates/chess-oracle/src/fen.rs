//! FEN parsing for piece placement and side to move.
//!
//! Castling rights, en passant square and move counters do not affect piece
//! placement, so they may be present or omitted and are not interpreted.

use cozy_chess::{BitBoard, Color, File, Rank, Square};

use crate::{ColoredPiece, FenError};

/// Piece placement decoded from the first FEN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub pieces: [BitBoard; 6],
    pub colors: [BitBoard; 2],
}

/// Parsed FEN fields relevant to analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedFen {
    pub placement: Placement,
    pub side_to_move: Color,
}

/// Parses a FEN string. Only the placement field is required; the active
/// color defaults to white when omitted.
pub(crate) fn parse(fen: &str) -> Result<ParsedFen, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    if parts.is_empty() || parts.len() > 6 {
        return Err(FenError::InvalidPartCount(parts.len()));
    }

    let placement = parse_placement(parts[0])?;

    let side_to_move = match parts.get(1) {
        None | Some(&"w") => Color::White,
        Some(&"b") => Color::Black,
        Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
    };

    Ok(ParsedFen {
        placement,
        side_to_move,
    })
}

fn parse_placement(placement: &str) -> Result<Placement, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut pieces = [BitBoard::EMPTY; 6];
    let mut colors = [BitBoard::EMPTY; 2];

    // FEN lists rank 8 first.
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank_number = 8 - i;
        let rank = Rank::index(7 - i);
        let mut file = 0usize;

        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid empty-square count '{}' in rank {}",
                        c, rank_number
                    )));
                }
                file += skip as usize;
            } else if let Some(colored) = ColoredPiece::from_fen_char(c) {
                if file >= 8 {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "rank {} has more than 8 squares",
                        rank_number
                    )));
                }
                let square = Square::new(File::index(file), rank);
                pieces[colored.piece as usize] |= square.bitboard();
                colors[colored.color as usize] |= square.bitboard();
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c, rank_number
                )));
            }
        }

        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank_number, file
            )));
        }
    }

    Ok(Placement { pieces, colors })
}

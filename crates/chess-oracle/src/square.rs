//! Algebraic square labels.

use cozy_chess::{File, Rank, Square};

use crate::InvalidSquareError;

/// Parses a square from algebraic notation (e.g., "e4").
///
/// The file letter may be upper or lower case; anything other than a file
/// letter followed by a rank digit is rejected.
///
/// # Errors
///
/// Returns [`InvalidSquareError`] carrying the original label.
pub fn parse_square(label: &str) -> Result<Square, InvalidSquareError> {
    let invalid = || InvalidSquareError(label.to_string());

    let bytes = label.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = match bytes[0].to_ascii_lowercase() {
        c @ b'a'..=b'h' => File::index((c - b'a') as usize),
        _ => return Err(invalid()),
    };
    let rank = match bytes[1] {
        c @ b'1'..=b'8' => Rank::index((c - b'1') as usize),
        _ => return Err(invalid()),
    };

    Ok(Square::new(file, rank))
}

/// Returns the lowercase algebraic label for a square (e.g., "e4").
pub fn square_label(square: Square) -> String {
    let file = (b'a' + square.file() as u8) as char;
    let rank = (b'1' + square.rank() as u8) as char;
    format!("{}{}", file, rank)
}

//! The board query interface used by the analyzers.

use cozy_chess::{Color, Square};

use crate::ColoredPiece;

/// Read-only board queries over an immutable position.
///
/// Square arithmetic (file, rank, square from file and rank) lives on
/// [`Square`] itself; this trait covers the queries that need board state.
/// Implementations must be pure: the same position always answers the same.
pub trait BoardOracle {
    /// Returns the piece on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<ColoredPiece>;

    /// Returns the squares holding pawns of `color`, in a1..h8 order.
    fn pawns_of(&self, color: Color) -> Vec<Square>;

    /// Returns the squares from which a piece of `color` attacks `square`.
    ///
    /// Sliding pieces are blocked by any piece in between. The occupant of
    /// `square` itself does not matter.
    fn attackers_of(&self, square: Square, color: Color) -> Vec<Square>;
}

impl<T: BoardOracle + ?Sized> BoardOracle for &T {
    fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        (**self).piece_at(square)
    }

    fn pawns_of(&self, color: Color) -> Vec<Square> {
        (**self).pawns_of(color)
    }

    fn attackers_of(&self, square: Square, color: Color) -> Vec<Square> {
        (**self).attackers_of(square, color)
    }
}

use crate::board_location::Coordinate;
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::rook_moves::rook_pattern;

/// Straight or diagonal, any distance.
#[inline]
pub fn queen_pattern(from: Coordinate, to: Coordinate) -> bool {
    rook_pattern(from, to) || bishop_pattern(from, to)
}

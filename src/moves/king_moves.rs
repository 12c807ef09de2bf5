//! King movement pattern.
//!
//! One square in any direction. Castling is recognised by the validator and
//! never goes through this predicate.

use crate::board_location::Coordinate;

#[inline]
pub fn king_pattern(from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    from != to && d_file.unsigned_abs() <= 1 && d_rank.unsigned_abs() <= 1
}

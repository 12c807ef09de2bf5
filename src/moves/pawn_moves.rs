//! Pawn movement patterns.
//!
//! Pawns are the only pieces whose reach depends on color and on whether the
//! move captures. Neither pattern allows a backward or sideways step.

use crate::board_location::Coordinate;
use crate::game_state::chess_types::Color;

/// Non-capturing advance: one square forward, or two from the pawn's home rank.
pub fn pawn_advance_pattern(color: Color, from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    if d_file != 0 {
        return false;
    }
    let forward = color.forward();
    d_rank == forward || (from.rank == color.pawn_home_rank() && d_rank == 2 * forward)
}

/// Capture: exactly one square diagonally forward.
pub fn pawn_capture_pattern(color: Color, from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    d_file.unsigned_abs() == 1 && d_rank == color.forward()
}

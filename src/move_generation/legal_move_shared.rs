//! Geometry helpers shared by the validator and the attack scan.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;

/// Squares strictly between `from` and `to` along a rank, file or diagonal.
///
/// Empty when the two squares are not aligned (a knight jump), adjacent, or
/// either lies off the board.
pub fn squares_between(from: Coordinate, to: Coordinate) -> impl Iterator<Item = Coordinate> {
    let (d_file, d_rank) = from.delta(to);
    let aligned = d_file == 0 || d_rank == 0 || d_file.unsigned_abs() == d_rank.unsigned_abs();
    let distance = if aligned && from.is_on_board() && to.is_on_board() {
        d_file.unsigned_abs().max(d_rank.unsigned_abs()) as i8
    } else {
        0
    };
    let (step_file, step_rank) = (d_file.signum(), d_rank.signum());

    (1..distance).map(move |i| Coordinate::new(from.file + step_file * i, from.rank + step_rank * i))
}

/// First occupied square on the way from `from` to `to`, if any.
#[inline]
pub fn first_blocker(board: &Board, from: Coordinate, to: Coordinate) -> Option<Coordinate> {
    squares_between(from, to).find(|square| board.piece_at(*square).is_some())
}

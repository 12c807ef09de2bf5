use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// A (file, rank) pair on the board, both zero based.
///
/// File 0 is the a-file and rank 0 is White's back rank. Construction never
/// checks bounds: off-board coordinates are representable and are rejected by
/// the validator, not by the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Whether both file and rank lie in `0..BOARD_SIZE`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Moves a coordinate by a specified file and rank offset.
    ///
    /// # Arguments
    ///
    /// * `d_file` - The file offset.
    /// * `d_rank` - The rank offset.
    ///
    /// # Returns
    ///
    /// * `Some(Coordinate)` if the shifted square is on the board, otherwise `None`.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Coordinate> {
        let moved = Coordinate::new(
            self.file.checked_add(d_file)?,
            self.rank.checked_add(d_rank)?,
        );
        moved.is_on_board().then_some(moved)
    }

    /// Signed (file, rank) difference from `self` to `to`.
    #[inline]
    pub fn delta(self, to: Coordinate) -> (i8, i8) {
        (
            to.file.saturating_sub(self.file),
            to.rank.saturating_sub(self.rank),
        )
    }

    /// Every on-board coordinate, file by file (a1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Coordinate::new(file, rank)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + self.file as u8);
            let rank = char::from(b'1' + self.rank as u8);
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

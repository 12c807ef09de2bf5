use std::fmt;

use crate::board_location::Coordinate;
use crate::game_state::chess_types::{MoveType, Piece, PieceKind};

/// A classified move.
///
/// Produced by the validator and appended to the board history verbatim once
/// committed. Callers may also build moves directly to seed a history or to
/// replay a trusted game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub moved_piece: Piece,
    pub move_type: MoveType,
}

impl Move {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate, moved_piece: Piece, move_type: MoveType) -> Self {
        Self {
            from,
            to,
            moved_piece,
            move_type,
        }
    }

    /// Anything other than a plain move to an empty square.
    ///
    /// Positions before such a move cannot recur, so the repetition check
    /// only replays history after the last one.
    #[inline]
    pub fn is_irreversible(&self) -> bool {
        self.move_type != MoveType::Attack
    }

    #[inline]
    pub fn is_pawn_move(&self) -> bool {
        self.moved_piece.kind() == PieceKind::Pawn
    }

    /// A pawn advancing two ranks along its file.
    pub fn is_two_square_pawn_advance(&self) -> bool {
        let (d_file, d_rank) = self.from.delta(self.to);
        self.is_pawn_move() && d_file == 0 && d_rank.unsigned_abs() == 2
    }

    /// A pawn reaching the far rank, where it is replaced by a queen.
    pub fn is_promotion(&self) -> bool {
        self.is_pawn_move() && self.to.rank == self.moved_piece.color().promotion_rank()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.move_type {
            MoveType::Capture | MoveType::EnPassant => 'x',
            MoveType::Attack | MoveType::Castling => '-',
        };
        write!(f, "{}{}{}", self.from, separator, self.to)
    }
}

//! Board model: piece placement plus the move history.
//!
//! `Board` is the single source of truth for what stands where and what has
//! happened. Turn order is derived from the history length alone (even means
//! White to move), so there is no separate side-to-move field to keep in sync.
//! The cached `BoardState` is only written by the board manager.

use std::fmt;

use crate::board_location::Coordinate;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{BoardState, Color, Piece, PieceKind};
use crate::utils::render_game_state::render_board;

/// Piece placement indexed `[file][rank]`.
pub type Placement = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[derive(Clone, Debug)]
pub struct Board {
    squares: Placement,
    history: Vec<Move>,
    state: BoardState,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces and no history.
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            history: Vec::new(),
            state: BoardState::Regular,
        }
    }

    /// The standard 32-piece starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in (0..BOARD_SIZE).zip(BACK_RANK_LAYOUT) {
            for color in [Color::White, Color::Black] {
                board.set_piece_at(Coordinate::new(file, color.home_rank()), Some(Piece::new(color, kind)));
                board.set_piece_at(
                    Coordinate::new(file, color.pawn_home_rank()),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Builder-style setup helper: places `piece` on `at` and returns the board.
    pub fn with_piece(mut self, at: Coordinate, piece: Piece) -> Self {
        self.set_piece_at(at, Some(piece));
        self
    }

    /// Piece on `at`, or `None` for an empty or off-board coordinate.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        if at.is_on_board() {
            self.squares[at.file as usize][at.rank as usize]
        } else {
            None
        }
    }

    /// Setup primitive: puts `piece` (or nothing) on `at`, returning what was there.
    ///
    /// Off-board coordinates are ignored.
    pub fn set_piece_at(&mut self, at: Coordinate, piece: Option<Piece>) -> Option<Piece> {
        if !at.is_on_board() {
            return None;
        }
        std::mem::replace(&mut self.squares[at.file as usize][at.rank as usize], piece)
    }

    /// Every occupied square with its piece, file by file.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |at| self.piece_at(at).map(|piece| (at, piece)))
    }

    /// Square of the king of `color`, if there is one.
    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces().find(|(_, piece)| *piece == king).map(|(at, _)| at)
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.squares
    }

    /// Compares piece placement only, ignoring history and cached state.
    #[inline]
    pub fn same_placement(&self, other: &Board) -> bool {
        self.squares == other.squares
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Appends `mv` to the history without touching the placement.
    ///
    /// This is the history-seeding primitive for position setup; committed
    /// moves go through the board manager instead.
    pub fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
    }

    /// White moves when the history length is even, Black when it is odd.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Board state cached by the last `update_board_state` call.
    #[inline]
    pub fn state(&self) -> BoardState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: BoardState) {
        self.state = state;
    }

    /// Placement-only copy used for hypothetical moves; history is left empty.
    pub(crate) fn scratch_copy(&self) -> Board {
        Board {
            squares: self.squares,
            history: Vec::new(),
            state: self.state,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::MoveType;

    #[test]
    fn standard_layout_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        for at in Coordinate::all() {
            let occupied = board.piece_at(at).is_some();
            assert_eq!(occupied, at.rank < 2 || at.rank > 5, "square {at}");
        }
        assert_eq!(board.piece_at(Coordinate::new(4, 0)), Some(Piece::WhiteKing));
        assert_eq!(board.piece_at(Coordinate::new(3, 7)), Some(Piece::BlackQueen));
        assert_eq!(board.piece_at(Coordinate::new(5, 1)), Some(Piece::WhitePawn));
        assert_eq!(board.piece_at(Coordinate::new(1, 7)), Some(Piece::BlackKnight));
        assert_eq!(board.placement()[4][7], Some(Piece::BlackKing));
        assert!(board.same_placement(&Board::standard()));
        assert!(!board.same_placement(&Board::empty()));
    }

    #[test]
    fn set_piece_returns_displaced_piece() {
        let mut board = Board::empty();
        let at = Coordinate::new(2, 2);
        assert_eq!(board.set_piece_at(at, Some(Piece::WhiteRook)), None);
        assert_eq!(board.set_piece_at(at, None), Some(Piece::WhiteRook));
        assert_eq!(board.piece_at(at), None);
    }

    #[test]
    fn off_board_access_is_harmless() {
        let mut board = Board::empty();
        let outside = Coordinate::new(8, 0);
        assert_eq!(board.set_piece_at(outside, Some(Piece::WhiteKing)), None);
        assert_eq!(board.piece_at(outside), None);
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn turn_follows_history_parity() {
        let mut board = Board::empty();
        assert_eq!(board.side_to_move(), Color::White);
        let a1 = Coordinate::new(0, 0);
        board.record_move(Move::new(a1, a1, Piece::WhiteRook, MoveType::Attack));
        assert_eq!(board.side_to_move(), Color::Black);
        board.record_move(Move::new(a1, a1, Piece::BlackRook, MoveType::Attack));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn find_king_locates_each_side() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::White), Some(Coordinate::new(4, 0)));
        assert_eq!(board.find_king(Color::Black), Some(Coordinate::new(4, 7)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }
}

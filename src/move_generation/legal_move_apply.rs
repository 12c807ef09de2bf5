//! Board mutation for accepted moves.
//!
//! `apply_placement` is shared by the live commit, the validator's scratch
//! simulation, perft and trusted replay, so all four agree on castling rook
//! relocation, en passant removal and promotion.

use log::{debug, warn};

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{CastlingSide, MoveType, Piece, PieceKind};

/// Relocates the piece on `mv.from` to `mv.to` with the move's side effects.
///
/// The piece actually standing on `from` is moved, so a trusted history
/// replays even when its recorded piece is stale. `previous` is the move
/// before `mv` and locates the pawn taken en passant. Returns `false` and
/// leaves the placement untouched when `from` is empty.
pub(crate) fn apply_placement(board: &mut Board, mv: &Move, previous: Option<&Move>) -> bool {
    let Some(piece) = board.set_piece_at(mv.from, None) else {
        return false;
    };

    let placed = if piece.kind() == PieceKind::Pawn && mv.to.rank == piece.color().promotion_rank() {
        Piece::new(piece.color(), PieceKind::Queen)
    } else {
        piece
    };
    board.set_piece_at(mv.to, Some(placed));

    match mv.move_type {
        MoveType::Castling => {
            let side = CastlingSide::from_files(mv.from.file, mv.to.file);
            let rank = mv.from.rank;
            let rook_from = Coordinate::new(side.rook_file(), rank);
            let rook_to = match side {
                CastlingSide::Queenside => Coordinate::new(mv.to.file + 1, rank),
                CastlingSide::Kingside => Coordinate::new(mv.to.file - 1, rank),
            };
            if let Some(rook) = board.set_piece_at(rook_from, None) {
                board.set_piece_at(rook_to, Some(rook));
            }
        }
        MoveType::EnPassant => {
            if let Some(previous) = previous {
                board.set_piece_at(previous.to, None);
            }
        }
        MoveType::Attack | MoveType::Capture => {}
    }

    true
}

/// Commits `mv` to the board and appends it to the history.
///
/// The move is recorded even if its origin is empty; that only happens when
/// replaying an untrusted record and is logged.
pub fn apply_move(board: &mut Board, mv: Move) {
    let previous = board.last_move().copied();
    if apply_placement(board, &mv, previous.as_ref()) {
        debug!(
            "move {} {:?} {:?} (ply {})",
            mv,
            mv.moved_piece,
            mv.move_type,
            board.history().len() + 1
        );
    } else {
        warn!("replayed move {mv} starts on an empty square; placement unchanged");
    }
    board.record_move(mv);
}

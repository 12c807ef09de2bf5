//! Move classification and validation.
//!
//! `validate` runs a fixed sequence of gates against a read-only board. The
//! first gate that fails decides the returned `MoveError`:
//!
//! 1. both coordinates on the board
//! 2. origin differs from destination
//! 3. a piece of the side to move stands on the origin
//! 4. classification by destination occupancy, then castling and en passant
//! 5. movement pattern, or the castling preconditions for a castling move
//! 6. clear path for everything except knights
//! 7. the mover's king is not attacked afterwards
//!
//! The live board is never touched: the last gate plays the move on a
//! scratch copy.

use crate::board_location::Coordinate;
use crate::chess_errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::{CastlingSide, Color, MoveType, Piece, PieceKind};
use crate::move_generation::legal_move_apply::apply_placement;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::{first_blocker, squares_between};
use crate::moves::movement_rules::matches_pattern;

/// Checks whether the side to move may play `from` to `to` and classifies it.
///
/// Returns the move that `apply_move` would commit; the board is unchanged
/// either way.
pub fn validate(board: &Board, from: Coordinate, to: Coordinate) -> MoveResult<Move> {
    if !from.is_on_board() || !to.is_on_board() {
        return Err(MoveError::OutOfBounds);
    }
    if from == to {
        return Err(MoveError::NullMove);
    }

    let mover = board.side_to_move();
    let piece = board.piece_at(from).ok_or(MoveError::EmptySquare)?;
    if piece.color() != mover {
        return Err(MoveError::WrongTurn);
    }

    let move_type = classify(board, piece, from, to)?;

    match move_type {
        MoveType::Castling => verify_castling(board, mover, from, to)?,
        MoveType::EnPassant => {
            if !matches_pattern(piece, from, to, true) {
                return Err(MoveError::IllegalPieceMove);
            }
        }
        MoveType::Attack | MoveType::Capture => {
            if !matches_pattern(piece, from, to, move_type == MoveType::Capture) {
                return Err(MoveError::IllegalPieceMove);
            }
        }
    }

    if piece.kind() != PieceKind::Knight && first_blocker(board, from, to).is_some() {
        return Err(MoveError::PieceBlocksPath);
    }

    let mv = Move::new(from, to, piece, move_type);

    let mut scratch = board.scratch_copy();
    apply_placement(&mut scratch, &mv, board.last_move());
    if is_king_in_check(&scratch, mover)? {
        return Err(MoveError::WouldExposeOwnKing);
    }

    Ok(mv)
}

fn classify(board: &Board, piece: Piece, from: Coordinate, to: Coordinate) -> MoveResult<MoveType> {
    let move_type = match board.piece_at(to) {
        None => MoveType::Attack,
        Some(target) if target.color() != piece.color() => MoveType::Capture,
        Some(_) => return Err(MoveError::OwnPieceCapture),
    };

    if is_castling_shape(piece, from, to) {
        return Ok(MoveType::Castling);
    }
    if move_type == MoveType::Attack && is_en_passant_shape(board, piece, from, to) {
        return Ok(MoveType::EnPassant);
    }
    Ok(move_type)
}

/// A king on its home square moving two files along its rank.
fn is_castling_shape(piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    piece.kind() == PieceKind::King
        && from == Coordinate::new(KING_HOME_FILE, piece.color().home_rank())
        && d_rank == 0
        && d_file.unsigned_abs() == 2
}

/// A diagonal pawn step behind an enemy pawn that has just double-advanced
/// to the square beside it.
fn is_en_passant_shape(board: &Board, piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    if piece.kind() != PieceKind::Pawn || from.file == to.file {
        return false;
    }
    let Some(last) = board.last_move() else {
        return false;
    };
    last.moved_piece == Piece::new(piece.color().opponent(), PieceKind::Pawn)
        && last.is_two_square_pawn_advance()
        && last.to.rank == from.rank
        && last.to.file.abs_diff(from.file) == 1
        && to.file == last.to.file
}

fn verify_castling(board: &Board, mover: Color, from: Coordinate, to: Coordinate) -> MoveResult<()> {
    let side = CastlingSide::from_files(from.file, to.file);
    let rank = from.rank;
    let rook_corner = Coordinate::new(side.rook_file(), rank);
    let king = Piece::new(mover, PieceKind::King);
    let rook = Piece::new(mover, PieceKind::Rook);

    if is_square_attacked(board, mover, from) {
        return Err(MoveError::CastlingWhileInCheck);
    }

    let king_moved = board.history().iter().any(|mv| mv.moved_piece == king);
    let rook_moved = board
        .history()
        .iter()
        .any(|mv| mv.from == rook_corner || mv.to == rook_corner);
    if king_moved || rook_moved || board.piece_at(rook_corner) != Some(rook) {
        return Err(MoveError::CastlingPieceMoved);
    }

    if squares_between(from, rook_corner).any(|square| board.piece_at(square).is_some()) {
        return Err(MoveError::CastlingBlocked);
    }

    let pass_through = Coordinate::new(side.pass_through_file(), rank);
    if is_square_attacked(board, mover, pass_through) {
        return Err(MoveError::CastlingThroughCheck);
    }

    Ok(())
}

//! Attacked-square and check detection.
//!
//! A square is attacked when some opposing piece's pattern reaches it and,
//! unless that piece is a knight, nothing stands in between. Pawns attack
//! with their capture pattern only. The validator's self-check and castling
//! gates and the board-state query all go through `is_square_attacked`.

use crate::board_location::Coordinate;
use crate::chess_errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_shared::first_blocker;
use crate::moves::movement_rules::attacks_pattern;

#[inline]
pub fn king_square(board: &Board, color: Color) -> MoveResult<Coordinate> {
    board.find_king(color).ok_or(MoveError::NoKingOnBoard)
}

/// Whether `king_color`'s king is attacked; a missing king is `NoKingOnBoard`.
pub fn is_king_in_check(board: &Board, king_color: Color) -> MoveResult<bool> {
    let king_sq = king_square(board, king_color)?;
    Ok(is_square_attacked(board, king_color, king_sq))
}

/// Whether any piece of `defender`'s opponent attacks `square`.
pub fn is_square_attacked(board: &Board, defender: Color, square: Coordinate) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() != defender)
        .any(|(at, piece)| {
            attacks_pattern(piece, at, square)
                && (piece.kind() == PieceKind::Knight || first_blocker(board, at, square).is_none())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn rook_attack_is_cut_by_blocker() {
        let mut board = Board::empty()
            .with_piece(Coordinate::new(4, 0), Piece::WhiteKing)
            .with_piece(Coordinate::new(4, 7), Piece::BlackRook);
        assert_eq!(is_king_in_check(&board, Color::White), Ok(true));

        board.set_piece_at(Coordinate::new(4, 3), Some(Piece::WhiteBishop));
        assert_eq!(is_king_in_check(&board, Color::White), Ok(false));
    }

    #[test]
    fn knights_jump_over_blockers() {
        let board = Board::standard();
        assert!(is_square_attacked(&board, Color::White, Coordinate::new(5, 5)));
        assert!(is_square_attacked(&board, Color::Black, Coordinate::new(2, 2)));
    }

    #[test]
    fn pawns_do_not_attack_straight_ahead() {
        let board = Board::empty().with_piece(Coordinate::new(3, 6), Piece::BlackPawn);
        assert!(!is_square_attacked(&board, Color::White, Coordinate::new(3, 5)));
        assert!(is_square_attacked(&board, Color::White, Coordinate::new(2, 5)));
        assert!(is_square_attacked(&board, Color::White, Coordinate::new(4, 5)));
    }

    #[test]
    fn own_pieces_never_attack() {
        let board = Board::empty().with_piece(Coordinate::new(0, 0), Piece::WhiteQueen);
        assert!(!is_square_attacked(&board, Color::White, Coordinate::new(0, 5)));
        assert!(is_square_attacked(&board, Color::Black, Coordinate::new(0, 5)));
    }

    #[test]
    fn missing_king_is_reported() {
        let board = Board::empty().with_piece(Coordinate::new(0, 0), Piece::BlackKing);
        assert_eq!(is_king_in_check(&board, Color::White), Err(MoveError::NoKingOnBoard));
        assert_eq!(is_king_in_check(&board, Color::Black), Ok(false));
    }
}

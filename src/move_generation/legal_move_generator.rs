//! Brute-force legal move enumeration.
//!
//! Every (origin, destination) pair for the side to move is pushed through
//! `validate`. Ordinary rejections just mean "try the next pair"; only fatal
//! errors (a malformed board) are propagated.

use crate::board_location::Coordinate;
use crate::chess_errors::MoveResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Piece;
use crate::move_generation::move_validator::validate;

/// All legal moves for the side to move, origin file-major then destination.
pub fn legal_moves(board: &Board) -> MoveResult<Vec<Move>> {
    let mut moves = Vec::new();
    for (from, _) in own_pieces(board) {
        for to in Coordinate::all() {
            if let Some(mv) = accept(validate(board, from, to))? {
                moves.push(mv);
            }
        }
    }
    Ok(moves)
}

/// Whether the side to move has at least one legal move.
pub fn any_legal_move(board: &Board) -> MoveResult<bool> {
    for (from, _) in own_pieces(board) {
        for to in Coordinate::all() {
            if accept(validate(board, from, to))?.is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn own_pieces(board: &Board) -> Vec<(Coordinate, Piece)> {
    let mover = board.side_to_move();
    board.pieces().filter(|(_, piece)| piece.color() == mover).collect()
}

/// Turns a non-fatal rejection into `None`.
#[inline]
fn accept(result: MoveResult<Move>) -> MoveResult<Option<Move>> {
    match result {
        Ok(mv) => Ok(Some(mv)),
        Err(err) if err.is_fatal() => Err(err),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::MoveError;
    use crate::game_state::chess_types::MoveType;

    #[test]
    fn start_position_has_twenty_moves() {
        let moves = legal_moves(&Board::standard()).expect("standard board is well formed");
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| mv.move_type == MoveType::Attack));
        assert_eq!(moves[0].from, Coordinate::new(0, 1));
    }

    #[test]
    fn lone_king_in_corner_has_three_moves() {
        let board = Board::empty()
            .with_piece(Coordinate::new(0, 0), Piece::WhiteKing)
            .with_piece(Coordinate::new(7, 7), Piece::BlackKing);
        assert_eq!(legal_moves(&board).expect("kings present").len(), 3);
        assert_eq!(any_legal_move(&board), Ok(true));
    }

    #[test]
    fn missing_king_propagates() {
        let board = Board::empty().with_piece(Coordinate::new(3, 3), Piece::WhiteKnight);
        assert_eq!(legal_moves(&board), Err(MoveError::NoKingOnBoard));
        assert_eq!(any_legal_move(&board), Err(MoveError::NoKingOnBoard));
    }

    #[test]
    fn side_without_pieces_has_no_moves() {
        let board = Board::empty().with_piece(Coordinate::new(3, 3), Piece::BlackKing);
        assert_eq!(any_legal_move(&board), Ok(false));
        assert!(legal_moves(&board).expect("nothing to validate").is_empty());
    }
}

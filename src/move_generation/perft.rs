use crate::chess_errors::MoveResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::MoveType;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

/// Leaf statistics of a perft walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Counts the positions reachable in exactly `depth` plies.
///
/// Moves are committed with `apply_move`, the same path a `BoardManager`
/// uses, so perft doubles as a consistency check of commit semantics.
pub fn perft(board: &Board, depth: u8) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = legal_moves(board)?;
    let mut total = PerftCounts::default();

    if depth == 1 {
        for mv in &moves {
            total.nodes += 1;
            match mv.move_type {
                MoveType::Capture => total.captures += 1,
                MoveType::EnPassant => {
                    total.captures += 1;
                    total.en_passant += 1;
                }
                MoveType::Castling => total.castles += 1,
                MoveType::Attack => {}
            }
            if mv.is_promotion() {
                total.promotions += 1;
            }
        }
        return Ok(total);
    }

    for mv in moves {
        let mut child = board.clone();
        apply_move(&mut child, mv);
        total.merge(perft(&child, depth - 1)?);
    }

    Ok(total)
}

//! Canonical chess-rule constants and the tunable draw-rule configuration.
//!
//! Geometry literals (board size, home ranks, rook files) and the standard
//! starting layout live here so the validator, the commit logic and the
//! board constructors all read them from one place.

use crate::game_state::chess_types::PieceKind;

/// Squares per file and per rank.
pub const BOARD_SIZE: i8 = 8;

pub const WHITE_HOME_RANK: i8 = 0;
pub const BLACK_HOME_RANK: i8 = BOARD_SIZE - 1;
pub const WHITE_PAWN_HOME_RANK: i8 = 1;
pub const BLACK_PAWN_HOME_RANK: i8 = BOARD_SIZE - 2;

/// File both kings start on; castling is only recognised from here.
pub const KING_HOME_FILE: i8 = 4;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const KINGSIDE_ROOK_FILE: i8 = BOARD_SIZE - 1;

/// Back-rank layout from the a-file to the h-file, shared by both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Half-moves without a pawn move or capture before the fifty-move draw.
pub const FIFTY_MOVE_HALF_MOVES: usize = 100;

/// Occurrences of one position (including the current one) for a repetition draw.
pub const REPETITION_OCCURRENCES: usize = 3;

/// Draw-rule parameters used by a `BoardManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub fifty_move_half_moves: usize,
    pub repetition_occurrences: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_half_moves: FIFTY_MOVE_HALF_MOVES,
            repetition_occurrences: REPETITION_OCCURRENCES,
        }
    }
}

//! The board manager: the sole mutating entry point of the rules engine.
//!
//! A `BoardManager` owns one `Board`, runs every requested move through the
//! validator, commits accepted moves with their side effects and answers the
//! derived game-state queries (check, mate, stalemate and the two draw rules).
//!
//! Besides the live board it keeps the position it was constructed from, so
//! the repetition check can replay the recorded history from a known start.

use log::{debug, trace};

use crate::board_location::Coordinate;
use crate::chess_errors::MoveResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{BoardState, Color};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{any_legal_move, legal_moves};
use crate::move_generation::move_validator::validate;

#[derive(Clone, Debug)]
pub struct BoardManager {
    board: Board,
    origin: Board,
    config: RulesConfig,
}

impl Default for BoardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardManager {
    /// A manager over the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::standard())
    }

    /// Rebuilds a game by replaying `moves` from the starting position.
    ///
    /// The moves are trusted and not validated. Each one relocates whatever
    /// stands on its origin square, with castling, en passant and promotion
    /// side effects taken from its `move_type`.
    pub fn from_moves(moves: &[Move]) -> Self {
        let origin = Board::standard();
        let mut board = origin.clone();
        for mv in moves {
            apply_move(&mut board, *mv);
        }
        Self {
            board,
            origin,
            config: RulesConfig::default(),
        }
    }

    /// A manager over a caller-populated board, history included.
    pub fn from_board(board: Board) -> Self {
        Self::with_config(board, RulesConfig::default())
    }

    pub fn with_config(board: Board, config: RulesConfig) -> Self {
        Self {
            origin: board.clone(),
            board,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Validates `from` to `to` for the side to move without committing it.
    pub fn validate_move(&self, from: Coordinate, to: Coordinate) -> MoveResult<Move> {
        validate(&self.board, from, to)
    }

    /// Validates and commits a move, returning it as recorded in the history.
    ///
    /// On error the board is exactly as it was before the call.
    pub fn perform_move(&mut self, from: Coordinate, to: Coordinate) -> MoveResult<Move> {
        match validate(&self.board, from, to) {
            Ok(mv) => {
                apply_move(&mut self.board, mv);
                Ok(mv)
            }
            Err(err) => {
                trace!("rejected {from}-{to}: {err}");
                Err(err)
            }
        }
    }

    pub fn legal_moves(&self) -> MoveResult<Vec<Move>> {
        legal_moves(&self.board)
    }

    /// Recomputes the state of the side to move and caches it on the board.
    ///
    /// | in check | has a legal move | state       |
    /// |----------|------------------|-------------|
    /// | no       | yes              | `Regular`   |
    /// | yes      | yes              | `Check`     |
    /// | yes      | no               | `CheckMate` |
    /// | no       | no               | `StaleMate` |
    pub fn update_board_state(&mut self) -> MoveResult<BoardState> {
        let mover = self.board.side_to_move();
        let in_check = is_king_in_check(&self.board, mover)?;
        let can_move = any_legal_move(&self.board)?;

        let state = match (in_check, can_move) {
            (false, true) => BoardState::Regular,
            (true, true) => BoardState::Check,
            (true, false) => BoardState::CheckMate,
            (false, false) => BoardState::StaleMate,
        };

        if state != self.board.state() {
            debug!("board state {:?} -> {:?} ({} to move)", self.board.state(), state, mover);
        }
        self.board.set_state(state);
        Ok(state)
    }

    /// Whether the current placement has occurred often enough for a
    /// repetition draw.
    ///
    /// Only positions after the last capture, castling or en passant are
    /// compared; earlier ones cannot recur. The current position counts as
    /// one occurrence.
    pub fn check_threefold_repetition_rule(&self) -> bool {
        let history = self.board.history();
        let origin_ply = self.origin.history().len();
        let window_start = history
            .iter()
            .rposition(Move::is_irreversible)
            .map_or(0, |index| index + 1)
            .max(origin_ply);

        let mut replay = self.origin.clone();
        let mut occurrences =
            usize::from(window_start == origin_ply && replay.same_placement(&self.board));

        for (ply, mv) in history.iter().enumerate().skip(origin_ply) {
            apply_move(&mut replay, *mv);
            if ply + 1 >= window_start && replay.same_placement(&self.board) {
                occurrences += 1;
            }
        }

        occurrences >= self.config.repetition_occurrences
    }

    /// Whether the configured number of half-moves passed with no pawn move,
    /// capture, castling or en passant.
    pub fn check_fifty_move_rule(&self) -> bool {
        let history = self.board.history();
        let window = self.config.fifty_move_half_moves;
        history.len() >= window
            && history[history.len() - window..]
                .iter()
                .all(|mv| !mv.is_irreversible() && !mv.is_pawn_move())
    }
}

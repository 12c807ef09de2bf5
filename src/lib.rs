//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the engine's subsystems (board model, movement
//! patterns, validation and move generation, the board manager, and
//! diagnostics helpers) so tests, benches and host applications can import
//! stable module paths.

pub mod board_location;
pub mod board_manager;
pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_validator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}

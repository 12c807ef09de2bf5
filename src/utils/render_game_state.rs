//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, log output and test
//! failure messages in text environments.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is printed first so White sits at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..BOARD_SIZE).rev() {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..BOARD_SIZE {
            match board.piece_at(Coordinate::new(file, rank)) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }

            if file < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

//! Dispatch from a piece to its movement pattern.
//!
//! Patterns describe geometry only: they ignore occupancy and board bounds
//! and never fail. Turning a failed pattern into a rejection is the
//! validator's job.

use crate::board_location::Coordinate;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::king_moves::king_pattern;
use crate::moves::knight_moves::knight_pattern;
use crate::moves::pawn_moves::{pawn_advance_pattern, pawn_capture_pattern};
use crate::moves::queen_moves::queen_pattern;
use crate::moves::rook_moves::rook_pattern;

/// Whether `piece` can geometrically go from `from` to `to`.
///
/// `capturing` only matters for pawns, which advance straight but capture
/// diagonally.
pub fn matches_pattern(piece: Piece, from: Coordinate, to: Coordinate, capturing: bool) -> bool {
    match piece.kind() {
        PieceKind::King => king_pattern(from, to),
        PieceKind::Queen => queen_pattern(from, to),
        PieceKind::Rook => rook_pattern(from, to),
        PieceKind::Bishop => bishop_pattern(from, to),
        PieceKind::Knight => knight_pattern(from, to),
        PieceKind::Pawn if capturing => pawn_capture_pattern(piece.color(), from, to),
        PieceKind::Pawn => pawn_advance_pattern(piece.color(), from, to),
    }
}

/// Whether `piece` standing on `from` attacks `to`, ignoring blockers.
#[inline]
pub fn attacks_pattern(piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    matches_pattern(piece, from, to, true)
}

#[cfg(test)]
mod tests {
    use super::{attacks_pattern, matches_pattern};
    use crate::board_location::Coordinate;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn pawn_mode_selects_advance_or_capture() {
        let e2 = Coordinate::new(4, 1);
        assert!(matches_pattern(Piece::WhitePawn, e2, Coordinate::new(4, 3), false));
        assert!(!matches_pattern(Piece::WhitePawn, e2, Coordinate::new(4, 3), true));
        assert!(matches_pattern(Piece::WhitePawn, e2, Coordinate::new(5, 2), true));
        assert!(!matches_pattern(Piece::WhitePawn, e2, Coordinate::new(5, 2), false));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let d7 = Coordinate::new(3, 6);
        assert!(attacks_pattern(Piece::BlackPawn, d7, Coordinate::new(4, 5)));
        assert!(!attacks_pattern(Piece::BlackPawn, d7, Coordinate::new(3, 5)));
    }

    #[test]
    fn capture_flag_is_ignored_for_other_pieces() {
        let b1 = Coordinate::new(1, 0);
        let c3 = Coordinate::new(2, 2);
        assert!(matches_pattern(Piece::WhiteKnight, b1, c3, false));
        assert!(matches_pattern(Piece::WhiteKnight, b1, c3, true));
        assert!(!matches_pattern(Piece::BlackRook, b1, c3, true));
    }
}

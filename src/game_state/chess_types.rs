//! Closed value types shared by every subsystem: sides, piece kinds, the
//! twelve concrete pieces, move categories and derived board states.

use std::fmt;

use crate::game_state::chess_rules::{
    BLACK_HOME_RANK, BLACK_PAWN_HOME_RANK, KINGSIDE_ROOK_FILE, KING_HOME_FILE,
    QUEENSIDE_ROOK_FILE, WHITE_HOME_RANK, WHITE_PAWN_HOME_RANK,
};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => WHITE_HOME_RANK,
            Color::Black => BLACK_HOME_RANK,
        }
    }

    #[inline]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Color::White => WHITE_PAWN_HOME_RANK,
            Color::Black => BLACK_PAWN_HOME_RANK,
        }
    }

    /// Farthest rank from this side's start; pawns promote on arrival.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opponent().home_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// One of the twelve (color, kind) combinations.
///
/// Pieces carry no per-instance state, so whole board snapshots compare by
/// value, which the repetition check relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteKing,
    WhiteQueen,
    WhiteBishop,
    WhiteKnight,
    WhiteRook,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackBishop,
    BlackKnight,
    BlackRook,
    BlackPawn,
}

impl Piece {
    pub const ALL: [Piece; 12] = [
        Piece::WhiteKing,
        Piece::WhiteQueen,
        Piece::WhiteBishop,
        Piece::WhiteKnight,
        Piece::WhiteRook,
        Piece::WhitePawn,
        Piece::BlackKing,
        Piece::BlackQueen,
        Piece::BlackBishop,
        Piece::BlackKnight,
        Piece::BlackRook,
        Piece::BlackPawn,
    ];

    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Piece::WhiteKing
            | Piece::WhiteQueen
            | Piece::WhiteBishop
            | Piece::WhiteKnight
            | Piece::WhiteRook
            | Piece::WhitePawn => Color::White,
            _ => Color::Black,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::WhiteKing | Piece::BlackKing => PieceKind::King,
            Piece::WhiteQueen | Piece::BlackQueen => PieceKind::Queen,
            Piece::WhiteBishop | Piece::BlackBishop => PieceKind::Bishop,
            Piece::WhiteKnight | Piece::BlackKnight => PieceKind::Knight,
            Piece::WhiteRook | Piece::BlackRook => PieceKind::Rook,
            Piece::WhitePawn | Piece::BlackPawn => PieceKind::Pawn,
        }
    }

    /// Unicode chess glyph used by the board renderer.
    pub const fn glyph(self) -> char {
        match self {
            Piece::WhiteKing => '♔',
            Piece::WhiteQueen => '♕',
            Piece::WhiteBishop => '♗',
            Piece::WhiteKnight => '♘',
            Piece::WhiteRook => '♖',
            Piece::WhitePawn => '♙',
            Piece::BlackKing => '♚',
            Piece::BlackQueen => '♛',
            Piece::BlackBishop => '♝',
            Piece::BlackKnight => '♞',
            Piece::BlackRook => '♜',
            Piece::BlackPawn => '♟',
        }
    }
}

/// Category a validated move falls into.
///
/// `Attack` is a move onto an empty square, `Capture` a move onto an enemy
/// piece. `Castling` and `EnPassant` are recognised from the move's shape and
/// the history, independent of what the destination holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Attack,
    Capture,
    Castling,
    EnPassant,
}

/// Derived state of the side to move, recomputed by `update_board_state`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoardState {
    #[default]
    Regular,
    Check,
    CheckMate,
    StaleMate,
}

/// Which rook a castling king moves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// Side implied by a king moving between the two files.
    #[inline]
    pub const fn from_files(from_file: i8, to_file: i8) -> Self {
        if to_file < from_file {
            CastlingSide::Queenside
        } else {
            CastlingSide::Kingside
        }
    }

    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_ROOK_FILE,
            CastlingSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    /// File the king crosses on its way to the destination.
    #[inline]
    pub const fn pass_through_file(self) -> i8 {
        match self {
            CastlingSide::Kingside => KING_HOME_FILE + 1,
            CastlingSide::Queenside => KING_HOME_FILE - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_catalog_round_trips_color_and_kind() {
        for piece in Piece::ALL {
            assert_eq!(Piece::new(piece.color(), piece.kind()), piece);
        }
    }

    #[test]
    fn opponent_swaps_sides() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn ranks_follow_direction_of_play() {
        assert_eq!(Color::White.pawn_home_rank(), 1);
        assert_eq!(Color::Black.pawn_home_rank(), 6);
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
    }

    #[test]
    fn castling_side_from_king_direction() {
        assert_eq!(CastlingSide::from_files(4, 2), CastlingSide::Queenside);
        assert_eq!(CastlingSide::from_files(4, 6), CastlingSide::Kingside);
        assert_eq!(CastlingSide::Queenside.pass_through_file(), 3);
        assert_eq!(CastlingSide::Kingside.pass_through_file(), 5);
        assert_eq!(CastlingSide::Kingside.rook_file(), 7);
    }
}

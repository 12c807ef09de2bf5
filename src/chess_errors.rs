//! Errors used throughout the rules engine.
//!
//! `MoveError` is the single rejection type returned by move validation,
//! check detection and the board manager. Every gate of the validator maps to
//! exactly one variant, so callers (UIs, notation front ends, persistence
//! layers) can match on the variant to present a message without parsing
//! strings.
//!
//! Usage guidelines:
//! - Functions that can reject a request return `MoveResult<T>`.
//! - All variants except `NoKingOnBoard` are ordinary rejections: the board is
//!   unchanged and the caller may simply try another move.
//! - `NoKingOnBoard` means the caller handed the engine a malformed position.
//!   It is a precondition violation rather than a game state and is the only
//!   variant for which [`MoveError::is_fatal`] returns `true`.

use thiserror::Error;

/// Crate-wide result alias.
pub type MoveResult<T> = Result<T, MoveError>;

/// Reason a requested move was rejected.
///
/// Variants are listed in the order the validator checks them; the first
/// failing gate decides which one is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Origin or destination lies outside the 8x8 grid.
    #[error("coordinate is outside the board")]
    OutOfBounds,

    /// Origin and destination are the same square.
    #[error("a piece cannot stay in place")]
    NullMove,

    /// There is no piece on the origin square.
    #[error("no piece to move on the origin square")]
    EmptySquare,

    /// The piece on the origin square belongs to the side not on move.
    #[error("it is the other side's turn to move")]
    WrongTurn,

    /// The destination holds a piece of the mover's own color.
    #[error("cannot capture own piece")]
    OwnPieceCapture,

    /// The move does not match the moving piece's movement pattern.
    #[error("piece cannot move that way")]
    IllegalPieceMove,

    /// A square strictly between origin and destination is occupied.
    #[error("another piece blocks the path")]
    PieceBlocksPath,

    /// The king tried to castle out of check.
    #[error("king in check cannot castle")]
    CastlingWhileInCheck,

    /// The king or the castling rook has already moved (or the rook is gone).
    #[error("king or rook has already moved; castling not allowed")]
    CastlingPieceMoved,

    /// A piece stands between the king and the castling rook.
    #[error("pieces stand between king and rook")]
    CastlingBlocked,

    /// The square the king passes over while castling is attacked.
    #[error("king cannot castle through an attacked square")]
    CastlingThroughCheck,

    /// After the move the mover's own king would be attacked.
    #[error("move would leave own king in check")]
    WouldExposeOwnKing,

    /// A king the engine needs to locate is missing from the board.
    ///
    /// This represents a malformed setup and is not recoverable by trying a
    /// different move.
    #[error("no king of the required color on the board")]
    NoKingOnBoard,
}

impl MoveError {
    /// Whether the error signals a malformed board rather than an illegal move.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, MoveError::NoKingOnBoard)
    }
}

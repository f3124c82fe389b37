use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game::GameId;

/// Every recoverable failure the rules core reports to its callers.
///
/// All variants are expected conditions a transport layer turns into a
/// response code. Board-invariant violations (a missing king, a corrupt
/// history entry) are not represented here; those panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A file or rank coordinate fell outside the 0-7 range.
    #[error("square {0:?} is outside the board")]
    InvalidSquare(BoardLocation),
    /// The source square of a candidate move holds no piece.
    #[error("no piece at source square {0:?}")]
    NoPieceAtSource(BoardLocation),
    /// The piece at the source square belongs to the side not on move.
    #[error("piece does not belong to the active color")]
    NotYourTurn,
    /// The move fails geometric, blocking, castling, or self-check rules.
    #[error("move is not legal")]
    IllegalMove,
    /// No game is registered under the given id.
    #[error("game {0} not found")]
    GameNotFound(GameId),
    /// The roster already has two players and the joining token is unknown.
    #[error("game already has two players")]
    GameFull,
    /// Promotion target was a king or pawn, or a target was supplied for a
    /// move that is not a promotion.
    #[error("invalid promotion choice")]
    InvalidPromotionChoice,
    /// A custom starting layout is unusable: off-board squares, two pieces
    /// sharing a square, or a side without exactly one king.
    #[error("invalid starting layout: {0}")]
    InvalidLayout(String),
}

use serde::{Deserialize, Serialize};

/// The six piece kinds. Serialized lowercase on the wire (`"pawn"`, `"rook"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceClass {
    /// A pawn may promote to anything except a king or another pawn.
    #[inline]
    pub const fn is_valid_promotion_target(self) -> bool {
        !matches!(self, PieceClass::Pawn | PieceClass::King)
    }
}

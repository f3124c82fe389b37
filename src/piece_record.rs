use serde::{Deserialize, Serialize};

use crate::board_location::BoardLocation;
use crate::color::Color;
use crate::piece_class::PieceClass;

/// A piece on the board: its class, color, position, and whether it has moved.
///
/// Identity is positional; a captured piece is removed from the register, not
/// soft-deleted. `has_moved` flips to true exactly once, on the piece's first
/// successful move, and gates castling and pawn double-step eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceRecord {
    #[serde(rename = "type")]
    pub class: PieceClass,
    pub color: Color,
    pub location: BoardLocation,
    #[serde(default)]
    pub has_moved: bool,
}

impl PieceRecord {
    pub fn new(class: PieceClass, color: Color, location: BoardLocation) -> Self {
        PieceRecord {
            class,
            color,
            location,
            has_moved: false,
        }
    }
}

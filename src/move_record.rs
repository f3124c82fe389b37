use serde::{Deserialize, Serialize};

use crate::board_location::BoardLocation;
use crate::color::Color;
use crate::game_status::GameStatus;
use crate::move_kind::MoveKind;
use crate::piece_class::PieceClass;

/// One entry of a game's append-only move history.
///
/// `class` records the piece kind after resolution, so a promotion records the
/// new kind. Records are immutable once appended; en-passant eligibility is
/// derived from the most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub color: Color,
    #[serde(rename = "type")]
    pub class: PieceClass,
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub kind: MoveKind,
    pub status: GameStatus,
    pub did_capture: bool,
    pub promoted_to: Option<PieceClass>,
}

impl MoveRecord {
    /// True iff this was a pawn advancing two ranks, the only move that opens
    /// an en-passant window.
    #[inline]
    pub fn is_pawn_double_step(&self) -> bool {
        self.class == PieceClass::Pawn && (self.from.1 - self.to.1).abs() == 2
    }
}

use serde::{Deserialize, Serialize};

/// What kind of move a legality check resolved to, orthogonal to piece class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    #[serde(rename = "nonSpecialMove")]
    Normal,
    EnPassant,
    Castling,
    Promotion,
}

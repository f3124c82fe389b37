use serde::{Deserialize, Serialize};

/// The two sides of the board. Serialized as `"white"` / `"black"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction pawns of this color advance along the rank axis.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pawns of this color start on (double-step eligibility).
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Farthest rank for this color; a pawn reaching it promotes.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// First-joiner color assignment policy for a new game.
///
/// Serialized as `"white"` / `"black"` / `"randomColor"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorPolicy {
    White,
    Black,
    RandomColor,
}

impl ColorPolicy {
    /// Resolves the policy to a concrete color for the first joiner.
    pub fn resolve(self) -> Color {
        match self {
            ColorPolicy::White => Color::White,
            ColorPolicy::Black => Color::Black,
            ColorPolicy::RandomColor => {
                if rand::random::<bool>() {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

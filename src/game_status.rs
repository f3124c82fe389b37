use serde::{Deserialize, Serialize};

/// Position classification after a completed move, for the side now on move.
///
/// `Checkmate` and `Stalemate` are terminal; `Check` is a substate of an
/// in-progress game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "isNotCheck")]
    NotCheck,
    #[serde(rename = "isCheck")]
    Check,
    #[serde(rename = "isCheckmate")]
    Checkmate,
    #[serde(rename = "isStalemate")]
    Stalemate,
}

impl GameStatus {
    /// Terminal statuses end the game; no further moves can be applied.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings() {
        assert_eq!(
            serde_json::to_string(&GameStatus::NotCheck).unwrap(),
            "\"isNotCheck\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Checkmate).unwrap(),
            "\"isCheckmate\""
        );
    }

    #[test]
    fn terminal_statuses() {
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(!GameStatus::NotCheck.is_terminal());
    }
}

use crate::board_location::{is_on_board, BoardLocation};
use crate::color::Color;
use crate::errors::GameError;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;

/// Flat storage for the pieces of one game, unique by location.
///
/// Pure storage plus O(n) lookup; no rule knowledge lives here. The board
/// never holds more than 32 pieces, so linear scans are not a concern.
/// Invariant: each color has at most one king. Legality checks clone the
/// whole register to simulate moves, so `Clone` must be a deep, independent
/// copy (it is; `PieceRecord` is `Copy`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegister {
    pieces: Vec<PieceRecord>,
}

const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

impl PieceRegister {
    /// The standard chess starting position.
    pub fn standard_setup() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            let home_rank = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            for (file, class) in BACK_RANK.iter().enumerate() {
                pieces.push(PieceRecord::new(*class, color, (file as i8, home_rank)));
            }
            for file in 0..8 {
                pieces.push(PieceRecord::new(
                    PieceClass::Pawn,
                    color,
                    (file, color.pawn_rank()),
                ));
            }
        }
        PieceRegister { pieces }
    }

    /// Builds a register from a caller-supplied layout (custom starting positions).
    pub fn from_records(records: Vec<PieceRecord>) -> Self {
        PieceRegister { pieces: records }
    }

    /// Checks that this register is a usable starting position: every piece
    /// on the board, no shared squares, exactly one king per color.
    ///
    /// Run once at game creation on caller-supplied layouts; rule code may
    /// then assume the kings exist. Partial boards built for unit tests skip
    /// this deliberately.
    pub fn validate(&self) -> Result<(), GameError> {
        for piece in &self.pieces {
            if !is_on_board(&piece.location) {
                return Err(GameError::InvalidLayout(format!(
                    "square {:?} is outside the board",
                    piece.location
                )));
            }
        }
        for (index, piece) in self.pieces.iter().enumerate() {
            if self.pieces[..index].iter().any(|p| p.location == piece.location) {
                return Err(GameError::InvalidLayout(format!(
                    "two pieces share square {:?}",
                    piece.location
                )));
            }
        }
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces
                .iter()
                .filter(|p| p.color == color && p.class == PieceClass::King)
                .count();
            if kings != 1 {
                return Err(GameError::InvalidLayout(format!(
                    "{:?} has {} kings, expected exactly one",
                    color, kings
                )));
            }
        }
        Ok(())
    }

    pub fn piece_at(&self, location: &BoardLocation) -> Option<&PieceRecord> {
        self.pieces.iter().find(|p| p.location == *location)
    }

    pub fn piece_at_mut(&mut self, location: &BoardLocation) -> Option<&mut PieceRecord> {
        self.pieces.iter_mut().find(|p| p.location == *location)
    }

    /// Removes the piece at `location`. Returns true iff a piece was present
    /// and removed; this is how captures are reported.
    pub fn remove_at(&mut self, location: &BoardLocation) -> bool {
        match self.pieces.iter().position(|p| p.location == *location) {
            Some(index) => {
                self.pieces.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn king_of(&self, color: Color) -> Option<&PieceRecord> {
        self.pieces
            .iter()
            .find(|p| p.color == color && p.class == PieceClass::King)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.iter()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

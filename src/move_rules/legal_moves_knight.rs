use crate::board_location::BoardLocation;
use crate::piece_record::PieceRecord;

/// Geometric knight legality: a (1,2) or (2,1) offset. Knights jump, so there
/// is no path-blocking check.
pub fn knight_move_is_legal(piece: &PieceRecord, to: BoardLocation) -> bool {
    let d_file = (piece.location.0 - to.0).abs();
    let d_rank = (piece.location.1 - to.1).abs();
    (d_file == 2 && d_rank == 1) || (d_file == 1 && d_rank == 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece_class::PieceClass;

    #[test]
    fn l_shaped_offsets() {
        let piece = PieceRecord::new(PieceClass::Knight, Color::White, (4, 4));
        assert!(knight_move_is_legal(&piece, (6, 5)));
        assert!(knight_move_is_legal(&piece, (3, 2)));
        assert!(knight_move_is_legal(&piece, (5, 6)));
        assert!(!knight_move_is_legal(&piece, (6, 6)));
        assert!(!knight_move_is_legal(&piece, (4, 6)));
    }
}

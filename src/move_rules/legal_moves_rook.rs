use crate::board_location::BoardLocation;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Geometric rook legality: same file or same rank, with every intervening
/// square on the path empty.
pub fn rook_move_is_legal(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
) -> bool {
    if piece.location.0 != to.0 && piece.location.1 != to.1 {
        return false;
    }
    path_is_clear(register, piece.location, to)
}

/// Walks the squares strictly between `from` and `to` along a straight or
/// diagonal line, returning false if any is occupied. Shared with the bishop.
pub(crate) fn path_is_clear(
    register: &PieceRegister,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    let step = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
    let mut cursor = (from.0 + step.0, from.1 + step.1);
    while cursor != to {
        if register.piece_at(&cursor).is_some() {
            return false;
        }
        cursor = (cursor.0 + step.0, cursor.1 + step.1);
    }
    true
}

use crate::board_location::BoardLocation;
use crate::move_rules::legal_moves_rook::path_is_clear;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Geometric bishop legality: equal absolute file and rank deltas, with every
/// intervening square on the diagonal empty.
pub fn bishop_move_is_legal(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
) -> bool {
    let d_file = (piece.location.0 - to.0).abs();
    let d_rank = (piece.location.1 - to.1).abs();
    if d_file != d_rank {
        return false;
    }
    path_is_clear(register, piece.location, to)
}

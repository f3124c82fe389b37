use crate::board_location::BoardLocation;
use crate::move_rules::legal_moves_bishop::bishop_move_is_legal;
use crate::move_rules::legal_moves_rook::rook_move_is_legal;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Geometric queen legality: legal iff the same move would be legal for a
/// rook or a bishop from the same square.
pub fn queen_move_is_legal(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
) -> bool {
    rook_move_is_legal(register, piece, to) || bishop_move_is_legal(register, piece, to)
}

use crate::board_location::BoardLocation;
use crate::move_kind::MoveKind;
use crate::move_record::MoveRecord;
use crate::move_rules::legal_move_checks::is_square_attacked;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Geometric king legality: an adjacent-square move or a castling move.
///
/// An adjacent move only has to stay clear of the enemy king here; whether
/// the destination is attacked is left to the self-check filter, which sees
/// the board as it stands after the move (a pawn's forward push stops being
/// an "attack" once the king occupies the square, and a slider sees through
/// the square the king vacated). The attacked-square test excludes kings, so
/// the adjacency rule here is what keeps the two kings apart.
pub fn king_move_kind(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> Option<MoveKind> {
    if let Some(enemy_king) = register.king_of(piece.color.opposite()) {
        if (enemy_king.location.0 - to.0).abs() <= 1 && (enemy_king.location.1 - to.1).abs() <= 1 {
            return None;
        }
    }

    let d_file = (piece.location.0 - to.0).abs();
    let d_rank = (piece.location.1 - to.1).abs();
    if d_file <= 1 && d_rank <= 1 {
        return Some(MoveKind::Normal);
    }

    if is_king_side_castle(register, piece, to, last_move)
        || is_queen_side_castle(register, piece, to, last_move)
    {
        return Some(MoveKind::Castling);
    }

    None
}

/// King-side castle: king e-file to g-file, rook on the h-file. Both pieces
/// unmoved, the squares between them empty, and the king's current, transit,
/// and destination squares all unattacked.
fn is_king_side_castle(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> bool {
    let rank = piece.location.1;
    if piece.has_moved || piece.location.0 != 4 || to != (6, rank) {
        return false;
    }
    if !rook_ready_for_castle(register, piece, (7, rank)) {
        return false;
    }
    if register.piece_at(&(5, rank)).is_some() || register.piece_at(&(6, rank)).is_some() {
        return false;
    }
    king_path_is_safe(register, piece, &[(4, rank), (5, rank), (6, rank)], last_move)
}

/// Queen-side castle: king e-file to c-file, rook on the a-file. The b-file
/// square must be empty but need not be safe; only the king's own path is
/// checked for attacks.
fn is_queen_side_castle(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> bool {
    let rank = piece.location.1;
    if piece.has_moved || piece.location.0 != 4 || to != (2, rank) {
        return false;
    }
    if !rook_ready_for_castle(register, piece, (0, rank)) {
        return false;
    }
    if register.piece_at(&(1, rank)).is_some()
        || register.piece_at(&(2, rank)).is_some()
        || register.piece_at(&(3, rank)).is_some()
    {
        return false;
    }
    king_path_is_safe(register, piece, &[(4, rank), (3, rank), (2, rank)], last_move)
}

fn rook_ready_for_castle(
    register: &PieceRegister,
    king: &PieceRecord,
    rook_square: BoardLocation,
) -> bool {
    match register.piece_at(&rook_square) {
        Some(rook) => {
            rook.class == PieceClass::Rook && rook.color == king.color && !rook.has_moved
        }
        None => false,
    }
}

fn king_path_is_safe(
    register: &PieceRegister,
    king: &PieceRecord,
    squares: &[BoardLocation],
    last_move: Option<&MoveRecord>,
) -> bool {
    let opponent = king.color.opposite();
    squares
        .iter()
        .all(|square| !is_square_attacked(register, *square, opponent, last_move))
}

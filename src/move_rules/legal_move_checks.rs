use crate::board_location::{is_on_board, BoardLocation};
use crate::color::Color;
use crate::move_kind::MoveKind;
use crate::move_record::MoveRecord;
use crate::move_rules::legal_moves_bishop::bishop_move_is_legal;
use crate::move_rules::legal_moves_king::king_move_kind;
use crate::move_rules::legal_moves_knight::knight_move_is_legal;
use crate::move_rules::legal_moves_pawn::pawn_move_kind;
use crate::move_rules::legal_moves_queen::queen_move_is_legal;
use crate::move_rules::legal_moves_rook::rook_move_is_legal;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Raw reachability: bounds, occupancy, and per-class geometry, without the
/// self-check filter.
///
/// This is the lower tier of the two-tier legality concept. The attacked-square
/// test below is defined over this tier only, which is what breaks the cycle
/// between "is this square attacked" and "is this move legal". Fully legal
/// moves are produced by the evaluator, which layers the self-check filter on
/// top of this function.
pub fn geometric_move_kind(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> Option<MoveKind> {
    if !is_on_board(&to) || to == piece.location {
        return None;
    }
    if let Some(occupant) = register.piece_at(&to) {
        if occupant.color == piece.color {
            return None;
        }
    }

    match piece.class {
        PieceClass::Pawn => pawn_move_kind(register, piece, to, last_move),
        PieceClass::Rook => rook_move_is_legal(register, piece, to).then_some(MoveKind::Normal),
        PieceClass::Knight => knight_move_is_legal(piece, to).then_some(MoveKind::Normal),
        PieceClass::Bishop => bishop_move_is_legal(register, piece, to).then_some(MoveKind::Normal),
        PieceClass::Queen => queen_move_is_legal(register, piece, to).then_some(MoveKind::Normal),
        PieceClass::King => king_move_kind(register, piece, to, last_move),
    }
}

/// A square is attacked by `attacker` iff one of its non-king pieces has a
/// geometrically legal move onto it.
///
/// Kings are excluded to avoid mutual recursion through the castling safety
/// checks; the "kings may never be adjacent" rule in the king move check
/// compensates.
pub fn is_square_attacked(
    register: &PieceRegister,
    square: BoardLocation,
    attacker: Color,
    last_move: Option<&MoveRecord>,
) -> bool {
    register
        .iter()
        .filter(|p| p.color == attacker && p.class != PieceClass::King)
        .any(|p| geometric_move_kind(register, p, square, last_move).is_some())
}

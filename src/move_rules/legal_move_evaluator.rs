use crate::board_location::BoardLocation;
use crate::move_kind::MoveKind;
use crate::move_record::MoveRecord;
use crate::move_rules::analysis::is_in_check;
use crate::move_rules::legal_move_checks::geometric_move_kind;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Full move legality: raw reachability plus the self-check filter.
///
/// The filter simulates the move on a disposable clone of the register and
/// rejects anything that leaves the mover's own king attacked. Pins,
/// discovered checks, and "must block or capture" all fall out of this one
/// filter; there is no separate pin detection.
pub fn evaluate_move(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> Option<MoveKind> {
    let kind = geometric_move_kind(register, piece, to, last_move)?;

    // Clone-and-discard simulation; the live register is never touched.
    let mut probe = register.clone();
    probe.remove_at(&to);
    if kind == MoveKind::EnPassant {
        // The captured pawn sits beside the destination, on the mover's rank.
        probe.remove_at(&(to.0, piece.location.1));
    }
    if let Some(moved) = probe.piece_at_mut(&piece.location) {
        moved.location = to;
    }
    if is_in_check(&probe, piece.color) {
        return None;
    }

    Some(kind)
}

/// All fully legal destinations for one piece, scanning the whole board.
pub fn legal_destinations(
    register: &PieceRegister,
    piece: &PieceRecord,
    last_move: Option<&MoveRecord>,
) -> Vec<BoardLocation> {
    let mut destinations = Vec::new();
    for file in 0..8 {
        for rank in 0..8 {
            if evaluate_move(register, piece, (file, rank), last_move).is_some() {
                destinations.push((file, rank));
            }
        }
    }
    destinations
}

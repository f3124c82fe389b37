use crate::board_location::BoardLocation;
use crate::move_kind::MoveKind;
use crate::move_record::MoveRecord;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// Geometric pawn legality: single step, double step from the pawn rank,
/// diagonal capture, en passant, and the promotion flag for moves reaching
/// the farthest rank.
///
/// Same-color destination occupancy is already excluded by the shared checks,
/// so an occupied destination here always holds an enemy piece.
pub fn pawn_move_kind(
    register: &PieceRegister,
    piece: &PieceRecord,
    to: BoardLocation,
    last_move: Option<&MoveRecord>,
) -> Option<MoveKind> {
    let direction = piece.color.forward_direction();
    let base_kind = if to.1 == piece.color.promotion_rank() {
        MoveKind::Promotion
    } else {
        MoveKind::Normal
    };
    let destination_empty = register.piece_at(&to).is_none();

    // Double step from the starting rank, through an empty intermediate square.
    if piece.location.1 == piece.color.pawn_rank()
        && to.0 == piece.location.0
        && to.1 == piece.location.1 + 2 * direction
        && destination_empty
        && register
            .piece_at(&(piece.location.0, piece.location.1 + direction))
            .is_none()
    {
        return Some(base_kind);
    }

    // Single step onto an empty square.
    if to.0 == piece.location.0 && to.1 == piece.location.1 + direction && destination_empty {
        return Some(base_kind);
    }

    // Diagonal single step: capture, or en passant onto an empty square.
    if (to.0 - piece.location.0).abs() == 1 && to.1 == piece.location.1 + direction {
        if !destination_empty {
            return Some(base_kind);
        }
        if destination_qualifies_en_passant(to, last_move) {
            return Some(MoveKind::EnPassant);
        }
    }

    None
}

/// En passant is only open against the immediately preceding move: a pawn
/// double step whose destination file equals the capturing pawn's destination
/// file. The captured pawn sits beside the destination, not on it.
fn destination_qualifies_en_passant(to: BoardLocation, last_move: Option<&MoveRecord>) -> bool {
    match last_move {
        Some(last) => last.is_pawn_double_step() && last.to.0 == to.0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::game_status::GameStatus;
    use crate::piece_class::PieceClass;

    fn pawn(color: Color, location: BoardLocation) -> PieceRecord {
        PieceRecord::new(PieceClass::Pawn, color, location)
    }

    #[test]
    fn single_and_double_steps_from_start() {
        let register = PieceRegister::standard_setup();
        let piece = *register.piece_at(&(4, 1)).unwrap();
        assert_eq!(
            pawn_move_kind(&register, &piece, (4, 2), None),
            Some(MoveKind::Normal)
        );
        assert_eq!(
            pawn_move_kind(&register, &piece, (4, 3), None),
            Some(MoveKind::Normal)
        );
        assert_eq!(pawn_move_kind(&register, &piece, (4, 4), None), None);
        assert_eq!(pawn_move_kind(&register, &piece, (5, 2), None), None);
    }

    #[test]
    fn double_step_requires_empty_intermediate() {
        let register = PieceRegister::from_records(vec![
            pawn(Color::White, (4, 1)),
            PieceRecord::new(PieceClass::Knight, Color::Black, (4, 2)),
        ]);
        let piece = *register.piece_at(&(4, 1)).unwrap();
        assert_eq!(pawn_move_kind(&register, &piece, (4, 3), None), None);
    }

    #[test]
    fn diagonal_requires_a_capture() {
        let register = PieceRegister::from_records(vec![
            pawn(Color::White, (4, 4)),
            pawn(Color::Black, (3, 5)),
        ]);
        let piece = *register.piece_at(&(4, 4)).unwrap();
        assert_eq!(
            pawn_move_kind(&register, &piece, (3, 5), None),
            Some(MoveKind::Normal)
        );
        assert_eq!(pawn_move_kind(&register, &piece, (5, 5), None), None);
    }

    #[test]
    fn en_passant_window_is_the_previous_move_only() {
        let register = PieceRegister::from_records(vec![
            pawn(Color::White, (4, 4)),
            pawn(Color::Black, (3, 4)),
        ]);
        let piece = *register.piece_at(&(4, 4)).unwrap();
        let double_step = MoveRecord {
            color: Color::Black,
            class: PieceClass::Pawn,
            from: (3, 6),
            to: (3, 4),
            kind: MoveKind::Normal,
            status: GameStatus::NotCheck,
            did_capture: false,
            promoted_to: None,
        };
        assert_eq!(
            pawn_move_kind(&register, &piece, (3, 5), Some(&double_step)),
            Some(MoveKind::EnPassant)
        );

        // A single step on the same file does not open the window.
        let single_step = MoveRecord {
            from: (3, 5),
            ..double_step
        };
        assert_eq!(
            pawn_move_kind(&register, &piece, (3, 5), Some(&single_step)),
            None
        );
        assert_eq!(pawn_move_kind(&register, &piece, (3, 5), None), None);
    }

    #[test]
    fn reaching_the_farthest_rank_flags_promotion() {
        let register = PieceRegister::from_records(vec![
            pawn(Color::White, (0, 6)),
            PieceRecord::new(PieceClass::Rook, Color::Black, (1, 7)),
        ]);
        let piece = *register.piece_at(&(0, 6)).unwrap();
        assert_eq!(
            pawn_move_kind(&register, &piece, (0, 7), None),
            Some(MoveKind::Promotion)
        );
        assert_eq!(
            pawn_move_kind(&register, &piece, (1, 7), None),
            Some(MoveKind::Promotion)
        );
    }
}

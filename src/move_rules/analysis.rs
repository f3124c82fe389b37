use crate::board_location::{offset_location, BoardLocation};
use crate::color::Color;
use crate::move_record::MoveRecord;
use crate::move_rules::legal_move_checks::{geometric_move_kind, is_square_attacked};
use crate::move_rules::legal_move_evaluator::evaluate_move;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

/// True iff the color's king stands on a square attacked by the opponent.
///
/// A missing king is a board-invariant violation, never a reachable game
/// state, so it panics rather than being folded into the error taxonomy.
pub fn is_in_check(register: &PieceRegister, color: Color) -> bool {
    let king = register
        .king_of(color)
        .expect("board invariant violated: king is missing");
    is_square_attacked(register, king.location, color.opposite(), None)
}

/// Checkmate: the side is in check, the king has no legal escape among its
/// eight neighbors, and the checking set cannot be neutralized.
///
/// Two or more simultaneous checkers force mate (one reply cannot address
/// both, and blocking two lines at once is impossible). A single checker must
/// be uncapturable and, unless it is a knight, unblockable on every square
/// strictly between it and the king.
pub fn is_in_checkmate(
    register: &PieceRegister,
    color: Color,
    last_move: Option<&MoveRecord>,
) -> bool {
    if !is_in_check(register, color) {
        return false;
    }
    let king = *register
        .king_of(color)
        .expect("board invariant violated: king is missing");

    for d_file in -1..=1 {
        for d_rank in -1..=1 {
            if d_file == 0 && d_rank == 0 {
                continue;
            }
            if let Ok(target) = offset_location(&king.location, d_file, d_rank) {
                if evaluate_move(register, &king, target, last_move).is_some() {
                    return false;
                }
            }
        }
    }

    let opponent = color.opposite();
    let checkers: Vec<PieceRecord> = register
        .iter()
        .filter(|p| p.color == opponent && p.class != PieceClass::King)
        .filter(|p| geometric_move_kind(register, p, king.location, last_move).is_some())
        .copied()
        .collect();

    if checkers.len() > 1 {
        return true;
    }
    let checker = checkers[0];

    // Capture the checker with any piece, king included.
    for piece in register.iter().filter(|p| p.color == color) {
        if evaluate_move(register, piece, checker.location, last_move).is_some() {
            return false;
        }
    }

    // Knight checks cannot be blocked.
    if checker.class == PieceClass::Knight {
        return true;
    }

    for square in squares_between(checker.location, king.location) {
        for piece in register
            .iter()
            .filter(|p| p.color == color && p.class != PieceClass::King)
        {
            if evaluate_move(register, piece, square, last_move).is_some() {
                return false;
            }
        }
    }

    true
}

/// Stalemate: the side to move is not in check and has no legal move for any
/// of its pieces, the king included, anywhere on the board.
pub fn is_in_stalemate(
    register: &PieceRegister,
    color: Color,
    last_move: Option<&MoveRecord>,
) -> bool {
    if is_in_check(register, color) {
        return false;
    }
    for piece in register.iter().filter(|p| p.color == color) {
        for file in 0..8 {
            for rank in 0..8 {
                if evaluate_move(register, piece, (file, rank), last_move).is_some() {
                    return false;
                }
            }
        }
    }
    true
}

/// The squares strictly between two locations sharing a rank, file, or
/// diagonal; empty for any other pair.
fn squares_between(a: BoardLocation, b: BoardLocation) -> Vec<BoardLocation> {
    let aligned = a.0 == b.0 || a.1 == b.1 || (b.0 - a.0).abs() == (b.1 - a.1).abs();
    if !aligned {
        return Vec::new();
    }
    let step = ((b.0 - a.0).signum(), (b.1 - a.1).signum());
    let mut squares = Vec::new();
    let mut cursor = (a.0 + step.0, a.1 + step.1);
    while cursor != b {
        squares.push(cursor);
        cursor = (cursor.0 + step.0, cursor.1 + step.1);
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class: PieceClass, color: Color, location: BoardLocation) -> PieceRecord {
        PieceRecord::new(class, color, location)
    }

    #[test]
    fn between_squares_on_lines_and_diagonals() {
        assert_eq!(squares_between((0, 0), (0, 3)), vec![(0, 1), (0, 2)]);
        assert_eq!(squares_between((5, 5), (2, 2)), vec![(4, 4), (3, 3)]);
        assert_eq!(squares_between((0, 0), (1, 0)), vec![]);
        assert!(squares_between((0, 0), (2, 1)).is_empty());
    }

    #[test]
    fn check_detection() {
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::White, (4, 0)),
            record(PieceClass::Rook, Color::Black, (4, 5)),
            record(PieceClass::King, Color::Black, (0, 7)),
        ]);
        assert!(is_in_check(&register, Color::White));
        assert!(!is_in_check(&register, Color::Black));
    }

    #[test]
    fn back_rank_mate() {
        // King boxed in by its own pawns, rook delivering check along rank 7.
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (7, 7)),
            record(PieceClass::Pawn, Color::Black, (6, 6)),
            record(PieceClass::Pawn, Color::Black, (7, 6)),
            record(PieceClass::Rook, Color::White, (0, 7)),
            record(PieceClass::King, Color::White, (4, 0)),
        ]);
        assert!(is_in_check(&register, Color::Black));
        assert!(is_in_checkmate(&register, Color::Black, None));
    }

    #[test]
    fn check_blockable_or_capturable_is_not_mate() {
        // Same back rank pattern, but a rook on the eighth file can interpose.
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (7, 7)),
            record(PieceClass::Pawn, Color::Black, (6, 6)),
            record(PieceClass::Pawn, Color::Black, (7, 6)),
            record(PieceClass::Rook, Color::Black, (5, 5)),
            record(PieceClass::Rook, Color::White, (0, 7)),
            record(PieceClass::King, Color::White, (4, 0)),
        ]);
        assert!(is_in_check(&register, Color::Black));
        assert!(!is_in_checkmate(&register, Color::Black, None));
    }

    #[test]
    fn pawn_shield_square_is_a_check_escape() {
        // The pawn in front of g7 does not attack g7, so the cornered king
        // escapes the rook check and this is not mate.
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (7, 7)),
            record(PieceClass::Rook, Color::White, (0, 7)),
            record(PieceClass::Pawn, Color::White, (6, 5)),
            record(PieceClass::King, Color::White, (0, 0)),
        ]);
        assert!(is_in_check(&register, Color::Black));
        assert!(!is_in_checkmate(&register, Color::Black, None));
    }

    #[test]
    fn double_check_with_no_escape_is_mate() {
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (7, 7)),
            record(PieceClass::Pawn, Color::Black, (6, 6)),
            record(PieceClass::Pawn, Color::Black, (7, 6)),
            // Both checkers are individually capturable, yet the double check
            // still mates.
            record(PieceClass::Rook, Color::White, (0, 7)),
            record(PieceClass::Knight, Color::White, (5, 6)),
            record(PieceClass::Rook, Color::Black, (0, 0)),
            record(PieceClass::Queen, Color::Black, (5, 0)),
            record(PieceClass::King, Color::White, (3, 0)),
        ]);
        assert!(is_in_checkmate(&register, Color::Black, None));
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (7, 7)),
            record(PieceClass::Pawn, Color::Black, (6, 6)),
            record(PieceClass::Pawn, Color::Black, (7, 6)),
            record(PieceClass::Knight, Color::White, (5, 6)),
            // This rook could interpose against a sliding check, but not a knight's.
            record(PieceClass::Rook, Color::Black, (0, 5)),
            // The white king guards the g8 escape square.
            record(PieceClass::King, Color::White, (5, 7)),
        ]);
        assert!(is_in_checkmate(&register, Color::Black, None));
    }

    #[test]
    fn lone_cornered_king_is_stalemated_not_mated() {
        // Queen on (1, 2) covers every neighbor of the corner without checking it.
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (0, 0)),
            record(PieceClass::Queen, Color::White, (1, 2)),
            record(PieceClass::King, Color::White, (7, 7)),
        ]);
        assert!(!is_in_check(&register, Color::Black));
        assert!(!is_in_checkmate(&register, Color::Black, None));
        assert!(is_in_stalemate(&register, Color::Black, None));
    }

    #[test]
    fn stalemate_requires_every_piece_to_be_stuck() {
        let register = PieceRegister::from_records(vec![
            record(PieceClass::King, Color::Black, (0, 0)),
            record(PieceClass::Queen, Color::White, (1, 2)),
            // A free pawn means the side still has a move.
            record(PieceClass::Pawn, Color::Black, (7, 6)),
            record(PieceClass::King, Color::White, (7, 7)),
        ]);
        assert!(!is_in_stalemate(&register, Color::Black, None));
    }
}

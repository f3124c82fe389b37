use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_server_core::color::Color;
use chess_server_core::move_rules::analysis::{is_in_check, is_in_checkmate};
use chess_server_core::move_rules::legal_move_evaluator::legal_destinations;
use chess_server_core::piece_class::PieceClass;
use chess_server_core::piece_record::PieceRecord;
use chess_server_core::piece_register::PieceRegister;

fn back_rank_mate_position() -> PieceRegister {
    PieceRegister::from_records(vec![
        PieceRecord::new(PieceClass::King, Color::Black, (7, 7)),
        PieceRecord::new(PieceClass::Pawn, Color::Black, (6, 6)),
        PieceRecord::new(PieceClass::Pawn, Color::Black, (7, 6)),
        PieceRecord::new(PieceClass::Rook, Color::White, (0, 7)),
        PieceRecord::new(PieceClass::King, Color::White, (4, 0)),
    ])
}

fn bench_legal_destinations(c: &mut Criterion) {
    let register = PieceRegister::standard_setup();

    let mut group = c.benchmark_group("legal_destinations");
    group.sample_size(50);

    group.bench_function("startpos_all_white_pieces", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for piece in register.iter().filter(|p| p.color == Color::White) {
                total += legal_destinations(black_box(&register), piece, None).len();
            }
            // Correctness guard: 20 moves from the standard setup.
            assert_eq!(total, 20);
            black_box(total)
        });
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let startpos = PieceRegister::standard_setup();
    let mate = back_rank_mate_position();

    let mut group = c.benchmark_group("analysis");
    group.sample_size(50);

    group.bench_function("check_startpos", |b| {
        b.iter(|| is_in_check(black_box(&startpos), black_box(Color::White)));
    });

    group.bench_function("checkmate_back_rank", |b| {
        b.iter(|| {
            let mated = is_in_checkmate(black_box(&mate), black_box(Color::Black), None);
            assert!(mated);
            black_box(mated)
        });
    });

    group.finish();
}

criterion_group!(rules_benches, bench_legal_destinations, bench_analysis);
criterion_main!(rules_benches);

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use draughts_board_renderer::ir::{Arrow, Board};
use draughts_board_renderer::layout::compute_layout;
use draughts_board_renderer::parser::parse_placement;
use draughts_board_renderer::render::{RenderOptions, render_svg};
use std::hint::black_box;

fn fixture(name: &str) -> (u32, String) {
    match name {
        "empty_10" => (10, "W".to_string()),
        "midgame_10" => (
            10,
            "W:W27,28,31,32,33,K36,38,41,43,G46:B3,7,k9,12,13,17,18,19,p22,24".to_string(),
        ),
        "start_8" => (8, Board::starting_fen(8).expect("valid size")),
        "start_10" => (10, Board::starting_fen(10).expect("valid size")),
        "start_12" => (12, Board::starting_fen(12).expect("valid size")),
        other => panic!("unknown fixture {other}"),
    }
}

const FIXTURES: [&str; 5] = ["empty_10", "midgame_10", "start_8", "start_10", "start_12"];

fn annotated_options() -> RenderOptions {
    RenderOptions {
        last_move: vec![32, 28],
        arrows: vec![Arrow::new(32, 28), Arrow::new(19, 19), Arrow::new(1, 50)],
        size: Some(360),
        ..RenderOptions::default()
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for name in FIXTURES {
        let (size, fen) = fixture(name);
        let fields = size * size / 2;
        group.bench_with_input(BenchmarkId::from_parameter(name), &fen, |b, data| {
            b.iter(|| {
                let pieces = parse_placement(black_box(data), fields).expect("parse failed");
                black_box(pieces.len());
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let options = annotated_options();
    for name in FIXTURES {
        let (size, fen) = fixture(name);
        let board = Board::from_fen(&fen, size).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, data| {
            b.iter(|| {
                let layout = compute_layout(Some(black_box(data)), &options);
                black_box(layout.cells.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let options = annotated_options();
    for name in FIXTURES {
        let (size, fen) = fixture(name);
        let board = Board::from_fen(&fen, size).expect("parse failed");
        let layout = compute_layout(Some(&board), &options);
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &options.theme, &options.pieces);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let options = annotated_options();
    for name in FIXTURES {
        let (size, fen) = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &fen, |b, data| {
            b.iter(|| {
                let board = Board::from_fen(black_box(data), size).expect("parse failed");
                let layout = compute_layout(Some(&board), &options);
                let svg = render_svg(&layout, &options.theme, &options.pieces);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_layout, bench_render, bench_end_to_end
);
criterion_main!(benches);

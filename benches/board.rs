//! Benchmarks for board snapshot/restore and animation frame selection.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chess_canvas::{
    animation::Graphics,
    board::Board,
    raster::PixelBuffer,
    schema::{AnimationConfig, BoardConfig},
};

fn test_board(cell: usize) -> Board {
    let config = BoardConfig {
        cell_h_pix: cell,
        cell_w_pix: cell,
        w_cells: 8,
        h_cells: 8,
    };
    let (width, height) = config.pixel_size().unwrap();
    Board::from_config(&config, PixelBuffer::filled(width, height, 4, 128)).unwrap()
}

fn bench_board_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_clone");

    for cell in [32, 64, 128] {
        let board = test_board(cell);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}px_cells", cell)),
            &cell,
            |b, _| {
                b.iter(|| black_box(board.clone()));
            },
        );
    }

    group.finish();
}

fn bench_board_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_reset");

    for cell in [32, 64, 128] {
        let mut board = test_board(cell);
        let sprite = PixelBuffer::filled(cell, cell, 4, 255);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}px_cells", cell)),
            &cell,
            |b, _| {
                b.iter(|| {
                    board.draw_sprite(&sprite, (3, 4));
                    board.reset();
                    black_box(board.img());
                });
            },
        );
    }

    group.finish();
}

fn bench_frame_selection(c: &mut Criterion) {
    let frames = (0..16).map(|i| PixelBuffer::filled(64, 64, 4, i)).collect();
    let mut graphics = Graphics::with_frames(AnimationConfig::new("bench"), frames).unwrap();
    graphics.reset(0);

    let mut now = 0u64;
    c.bench_function("graphics_update", |b| {
        b.iter(|| {
            now += 17;
            graphics.update(black_box(now));
            black_box(graphics.current_img());
        });
    });
}

criterion_group!(
    benches,
    bench_board_clone,
    bench_board_reset,
    bench_frame_selection
);
criterion_main!(benches);

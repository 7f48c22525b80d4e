//! Screen benchmark: Full-frame writes, lookback reads and resize commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use screenbuf::{Cell, Screen, TerminalSize, TextGraphics};

const SIZES: [(u16, u16); 3] = [(80, 24), (120, 40), (200, 60)];

fn frame_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_write");

    for (columns, rows) in SIZES {
        let size = TerminalSize::new(columns, rows);
        group.bench_with_input(BenchmarkId::new("ascii", format!("{columns}x{rows}")), &size, |b, &size| {
            let mut screen = Screen::new(size);
            let cell = Cell::new('x');
            b.iter(|| {
                for row in 0..size.rows {
                    for col in 0..size.columns {
                        screen.set_character(col, row, black_box(cell));
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("cjk", format!("{columns}x{rows}")), &size, |b, &size| {
            let mut screen = Screen::new(size);
            let cell = Cell::new('日');
            b.iter(|| {
                for row in 0..size.rows {
                    for col in (0..size.columns).step_by(2) {
                        screen.set_character(col, row, black_box(cell));
                    }
                }
            });
        });
    }

    group.finish();
}

fn put_string(c: &mut Criterion) {
    let mut screen = Screen::new(TerminalSize::new(120, 40));
    let line = "fn main() {\tprintln!(\"こんにちは\");\t}";

    c.bench_function("put_string_mixed", |b| {
        b.iter(|| {
            let mut g = screen.text_graphics();
            for row in 0..40 {
                g.put_string(0, row, black_box(line));
            }
        });
    });
}

fn back_read(c: &mut Criterion) {
    let mut screen = Screen::new(TerminalSize::new(200, 60));
    screen.text_graphics().fill('日');

    c.bench_function("back_character_full_scan", |b| {
        b.iter(|| {
            let mut wide = 0usize;
            for row in 0..60 {
                for col in 0..200 {
                    if screen.back_character(col, row).is_some_and(|c| c.is_double_width()) {
                        wide += 1;
                    }
                }
            }
            black_box(wide)
        });
    });
}

fn resize_commit(c: &mut Criterion) {
    let small = TerminalSize::new(80, 24);
    let large = TerminalSize::new(200, 60);

    c.bench_function("resize_commit_grow_shrink", |b| {
        let mut screen = Screen::new(small);
        b.iter(|| {
            screen.add_resize_request(large);
            black_box(screen.do_resize_if_necessary());
            screen.add_resize_request(small);
            black_box(screen.do_resize_if_necessary());
        });
    });
}

criterion_group!(benches, frame_write, put_string, back_read, resize_commit);
criterion_main!(benches);

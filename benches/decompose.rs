use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use figure_rects::logging::{LogEvent, LogSink};
use figure_rects::{
    BlockRenderer, Canvas, Decomposer, DecomposerConfig, Figure, LogLevel, Logger,
    LoggingResult, Rect,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

/// `cols` × `rows` tiles of `tile_w` × `tile_h`, neighbours sharing edges.
fn tiled_figure(cols: usize, rows: usize, tile_w: usize, tile_h: usize) -> String {
    let tiles = (0..rows).flat_map(|row| {
        (0..cols).map(move |col| {
            Rect::new(col * (tile_w - 1), row * (tile_h - 1), tile_w, tile_h)
        })
    });
    Canvas::from_rects(tiles).render()
}

fn sweep_tiled_grid(c: &mut Criterion) {
    let input = tiled_figure(24, 12, 6, 4);
    let figure = Figure::parse(&input).expect("figure");
    c.bench_function("sweep_tiled_grid", |b| {
        b.iter(|| black_box(&figure).rectangles().count());
    });
}

fn parse_and_sweep(c: &mut Criterion) {
    let input = tiled_figure(24, 12, 6, 4);
    c.bench_function("parse_and_sweep", |b| {
        b.iter(|| figure_rects::decompose(black_box(&input)).expect("decompose"));
    });
}

fn logged_session(c: &mut Criterion) {
    let input = tiled_figure(24, 12, 6, 4);
    let mut config = DecomposerConfig::default();
    config.logger = Some(Logger::new(NullSink).with_min_level(LogLevel::Trace));
    config.enable_metrics();
    let decomposer = Decomposer::new(config);
    c.bench_function("logged_session", |b| {
        b.iter(|| decomposer.decompose(black_box(&input)).expect("decompose"));
    });
}

fn render_blocks(c: &mut Criterion) {
    let input = tiled_figure(24, 12, 6, 4);
    let rects = figure_rects::decompose(&input).expect("decompose");
    c.bench_function("render_blocks", |b| {
        b.iter(|| {
            let mut sink = io::sink();
            BlockRenderer::with_default()
                .render(&mut sink, black_box(rects.iter().copied()))
                .expect("render")
        });
    });
}

criterion_group!(
    benches,
    sweep_tiled_grid,
    parse_and_sweep,
    logged_session,
    render_blocks
);
criterion_main!(benches);

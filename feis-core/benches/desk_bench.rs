//! Criterion benchmarks for the desk hot paths.
//!
//! Benchmarks:
//! 1. Chart render into a display list (builtin and long series)
//! 2. FAQ matching (hit on the first entry, fallback after a full scan)
//! 3. Market refresh (six assets, summary repaint, chart redraw)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use feis_core::render::{render, ChartStyle, DisplayList};
use feis_core::{AssetCatalog, DeskConfig, DeskDashboard, FaqBook, Horizon};

// ── Helpers ──────────────────────────────────────────────────────────

fn long_series(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0).collect()
}

// ── 1. Chart render ──────────────────────────────────────────────────

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_render");
    let style = ChartStyle::default();
    let catalog = AssetCatalog::builtin();

    group.bench_function("builtin_sp500_1y", |b| {
        let mut list = DisplayList::new(640.0, 260.0);
        b.iter(|| render(&mut list, black_box(catalog.first()), Horizon::Long, &style));
    });

    for &points in &[30, 250, 1000] {
        let mut asset = catalog.first().clone();
        asset.series.insert(Horizon::Long, long_series(points));
        group.bench_with_input(BenchmarkId::new("series", points), &points, |b, _| {
            let mut list = DisplayList::new(640.0, 260.0);
            b.iter(|| render(&mut list, black_box(&asset), Horizon::Long, &style));
        });
    }

    group.finish();
}

// ── 2. FAQ matching ──────────────────────────────────────────────────

fn bench_faq(c: &mut Criterion) {
    let mut group = c.benchmark_group("faq_answer");
    let book = FaqBook::builtin();

    group.bench_function("first_entry_hit", |b| {
        b.iter(|| book.answer(black_box("Un livret A, c'est utile ?")));
    });
    group.bench_function("fallback", |b| {
        b.iter(|| book.answer(black_box("bonjour, comment se passe la réunion de jeudi ?")));
    });

    group.finish();
}

// ── 3. Market refresh ────────────────────────────────────────────────

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_refresh");
    let mut config = DeskConfig::default();
    config.market.seed = Some(1);

    group.bench_function("six_assets", |b| {
        let mut desk = DeskDashboard::in_memory(AssetCatalog::builtin(), &config);
        desk.start();
        b.iter(|| desk.refresh_market());
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_faq, bench_refresh);
criterion_main!(benches);

//! Layout throughput over synthetic item sets.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use dirchart::{layout_bars, layout_pie, BarOptions, FileEntry, SizedItem};

fn synthetic_items(count: usize) -> Vec<SizedItem> {
    (0..count)
        .map(|i| {
            SizedItem::File(FileEntry {
                name: format!("file-{:04}", i),
                size: (i as u64 * 2_654_435_761) % 50_000_000 + 1,
            })
        })
        .collect()
}

fn bench_layouts(c: &mut Criterion) {
    let items = synthetic_items(1000);
    let options = BarOptions::new(800.0);

    c.bench_function("layout_bars_1000", |b| {
        b.iter(|| layout_bars(black_box(&items), black_box(&options)))
    });

    c.bench_function("layout_pie_1000", |b| {
        b.iter(|| layout_pie(black_box(&items)))
    });
}

criterion_group!(benches, bench_layouts);
criterion_main!(benches);

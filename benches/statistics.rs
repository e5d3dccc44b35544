//! Ingestion and statistics benchmarks.
//!
//! Measures tokenizing/validating synthetic numeric text and computing a full summary.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_file_statistics::ingestion::ingest_numbers_from_reader;
use rust_file_statistics::processing::{merge_sort, StatisticsSummary};

/// Synthetic numeric text: `rows` lines of ten values, every 50th token invalid.
fn generate_numeric_text(rows: usize) -> String {
    let mut data = String::new();
    for row in 0..rows {
        for col in 0..10 {
            if col > 0 {
                data.push_str(if col % 2 == 0 { ", " } else { " " });
            }
            let i = row * 10 + col;
            if i % 50 == 49 {
                data.push_str("bad");
            } else {
                data.push_str(&format!("{:.3}", (i % 997) as f64 * 1.25 - 300.0));
            }
        }
        data.push('\n');
    }
    data
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_numbers");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_numeric_text(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| ingest_numbers_from_reader(black_box(data.as_bytes())))
        });
    }

    group.finish();
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for n in [1_000, 10_000, 100_000].iter() {
        let values: Vec<f64> = (0..*n).map(|i| ((i * 7919) % 10_007) as f64).collect();
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::new("len", n), &values, |b, values| {
            b.iter(|| merge_sort(black_box(values)))
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let data = generate_numeric_text(10_000);
    let ingest = ingest_numbers_from_reader(data.as_bytes()).expect("in-memory read");
    let sorted = ingest.dataset.sorted();

    c.bench_function("summary_100k", |b| {
        b.iter(|| StatisticsSummary::compute(black_box(&ingest.dataset), black_box(&sorted)))
    });
}

criterion_group!(benches, bench_ingest, bench_merge_sort, bench_summary);
criterion_main!(benches);

//! Benchmarks for duration parsing and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use giztoy_jsdur::Duration;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsdur_parse");

    for input in ["24h", "2h15m3s99ms", "1.5h", "-2562047h47m16.854775808s", "0"] {
        group.bench_with_input(BenchmarkId::new("parse", input), input, |b, input| {
            b.iter(|| Duration::parse(black_box(input)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsdur_render");

    let values = [
        ("sub_second", Duration::from_nanos(1_500)),
        (
            "hms",
            Duration::from_hours(5) + Duration::from_mins(12) + Duration::from_secs(47),
        ),
        ("max", Duration::MAX),
        ("zero", Duration::ZERO),
    ];
    for (name, d) in values {
        group.bench_with_input(BenchmarkId::new("render", name), &d, |b, d| {
            b.iter(|| black_box(d).render())
        });
    }

    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let d = Duration::from_hours(2) + Duration::from_mins(15) + Duration::from_millis(3_099);
    let encoded = d.to_json();

    c.bench_function("jsdur_to_json", |b| b.iter(|| black_box(&d).to_json()));
    c.bench_function("jsdur_from_json", |b| {
        b.iter(|| Duration::from_json(black_box(&encoded)))
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_json);
criterion_main!(benches);

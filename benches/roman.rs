use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fmt_engine::roman::{encode, parse_roman_numeral};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("roman_encode");
    for n in [4u32, 1994, 3888, 3999, 40_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| encode(black_box(n)))
        });
    }
    group.finish();
}

fn bench_full_range(c: &mut Criterion) {
    c.bench_function("roman_round_trip_1_3999", |b| {
        b.iter(|| {
            for n in 1..=3999u32 {
                if let Ok(numeral) = encode(n) {
                    let _ = black_box(parse_roman_numeral(&numeral));
                }
            }
        })
    });
}

criterion_group!(benches, bench_encode, bench_full_range);
criterion_main!(benches);

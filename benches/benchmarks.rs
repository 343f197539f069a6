/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdunits::units::{convert, parse_unit};

fn unit_conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unit Conversions");

    group.bench_function("table_lookup nm -> A", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(convert(black_box(i as f64 * 0.1), "nm", "A").ok());
            }
        })
    });

    group.bench_function("composite kcal/(mol*nm) -> kJ/(mol*A)", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(convert(black_box(i as f64 * 0.1), "kcal/(mol*nm)", "kJ/(mol*A)").ok());
            }
        })
    });

    group.finish();
}

fn parser_benchmark(c: &mut Criterion) {
    c.bench_function("parse_unit", |b| {
        b.iter(|| black_box(parse_unit(black_box("kJ/(mol*Angstrom^2)/ps")).ok()))
    });
}

criterion_group!(benches, unit_conversion_benchmark, parser_benchmark);
criterion_main!(benches);

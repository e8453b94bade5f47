//! Benchmarks for relay-directive parsing
//!
//! Parsing runs once at session setup, but directives are operator-authored
//! and can carry arbitrary garbage; the permissive path should stay cheap
//! even on long or heavily malformed input.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vantage::parse_directive;

fn well_formed_directive(entries: usize) -> String {
    (0..entries)
        .map(|i| format!("turn:user{i}:secret{i}@relay{i}.example.net:3478"))
        .collect::<Vec<_>>()
        .join(",")
}

fn mixed_directive(entries: usize) -> String {
    (0..entries)
        .map(|i| {
            if i % 3 == 0 {
                "not-a-valid-entry".to_string()
            } else {
                format!("turn:user{i}:secret{i}@relay{i}.example.net:3478")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_directive_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("directive_parse");

    for entries in [1usize, 8, 64] {
        let directive = well_formed_directive(entries);
        group.bench_with_input(
            BenchmarkId::new("well_formed", entries),
            &directive,
            |b, directive| b.iter(|| parse_directive(black_box(directive))),
        );
    }

    for entries in [8usize, 64] {
        let directive = mixed_directive(entries);
        group.bench_with_input(BenchmarkId::new("mixed", entries), &directive, |b, directive| {
            b.iter(|| parse_directive(black_box(directive)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_directive_parse);
criterion_main!(benches);

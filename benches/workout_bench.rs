// ABOUTME: Criterion benchmarks for sensor package dispatch and summary rendering
// ABOUTME: Measures read_package, metric derivation, and text/JSON formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout tracker.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use workout_tracker::demo::DEMO_PACKAGES;
use workout_tracker::dispatcher::read_package;
use workout_tracker::formatters::{format_output, summarize, OutputFormat};
use workout_tracker::training::Training;

fn bench_read_package(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_package");
    for (code, values) in DEMO_PACKAGES {
        group.bench_with_input(BenchmarkId::from_parameter(code), &values, |b, values| {
            b.iter(|| read_package(black_box(code), black_box(values)));
        });
    }
    group.finish();
}

fn bench_summaries(c: &mut Criterion) {
    let records: Vec<_> = DEMO_PACKAGES
        .iter()
        .filter_map(|(code, values)| read_package(code, values).ok())
        .collect();

    let mut group = c.benchmark_group("summary");
    group.bench_function("text", |b| {
        b.iter(|| {
            for record in &records {
                black_box(summarize(black_box(record)));
            }
        });
    });
    group.bench_function("json", |b| {
        b.iter(|| {
            for record in &records {
                let info = record.show_training_info();
                black_box(format_output(black_box(&info), OutputFormat::Json).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_read_package, bench_summaries);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use approvals_board::*;

const STATUSES: [&str; 4] = ["Pending", "Approved", "In Progress", "Unassigned"];

fn make_records(size: usize) -> RecordSet {
    RecordSet::new(
        (0..size)
            .map(|i| {
                Record::from_pairs([
                    ("title", format!("Request {}", i)),
                    ("last name", format!("Name{}", i % 97)),
                    ("assigned to", format!("Agent {}", i % 5)),
                    ("Status", STATUSES[i % STATUSES.len()].to_string()),
                    ("Submited", format!("2024-05-{:02}", i % 28 + 1)),
                ])
            })
            .collect(),
    )
}

fn bench_equality_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality_filter");

    for size in [1_000, 10_000, 50_000].iter() {
        let records = make_records(*size);
        let criteria = FilterCriteria::new()
            .with_equals("Status", "Approved")
            .with_equals("assigned to", "Agent 3");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_records(black_box(&records), black_box(&criteria)));
        });
    }
    group.finish();
}

fn bench_quick_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_search");

    for size in [1_000, 10_000, 50_000].iter() {
        let records = make_records(*size);
        let criteria = FilterCriteria::new().with_search("name4");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_records(black_box(&records), black_box(&criteria)));
        });
    }
    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");

    for size in [1_000, 10_000, 50_000].iter() {
        let records = make_records(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| paginate(black_box(&records), 20, black_box(size / 40)));
        });
    }
    group.finish();
}

fn bench_view_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_model");

    for size in [1_000, 10_000].iter() {
        let view = ViewConfig::default();
        let board = Board::new(view, LoadState::Ready(make_records(*size)));
        let state = ViewState::new()
            .with_filter("Status", "Pending")
            .with_search("request 1");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| board.view_model(black_box(&state)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_equality_filter,
    bench_quick_search,
    bench_paginate,
    bench_view_model
);
criterion_main!(benches);

//! Performance benchmarks for the Offboarding Engine.
//!
//! The calculation path is pure in-memory arithmetic; these benchmarks keep
//! an eye on the recompute-on-read design, since every snapshot re-derives
//! duration and entitlement from scratch.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use offboarding_engine::calculation::{compute_entitlement, compute_service_duration};
use offboarding_engine::models::{DataEntryForm, FinancialInputs};
use offboarding_engine::workflow::OffboardingWorkflow;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_inputs() -> FinancialInputs {
    FinancialInputs::new(Decimal::from(12000), date(2016, 4, 1), Decimal::from(21))
}

/// Builds a workflow sitting in the clearance stage.
fn workflow_in_clearance() -> OffboardingWorkflow {
    let mut workflow = OffboardingWorkflow::new();
    workflow
        .submit_data_entry(DataEntryForm {
            name: "Ali".to_string(),
            job_title: "Engineer".to_string(),
            start_date: Some(date(2016, 4, 1)),
            resignation_date: Some(date(2024, 6, 1)),
            reason: String::new(),
        })
        .expect("valid form");
    workflow
}

fn bench_service_duration(c: &mut Criterion) {
    let start = Some(date(2016, 4, 1));
    let end = Some(date(2024, 6, 1));

    c.bench_function("compute_service_duration", |b| {
        b.iter(|| compute_service_duration(black_box(start), black_box(end)))
    });
}

fn bench_entitlement(c: &mut Criterion) {
    let duration = compute_service_duration(Some(date(2016, 4, 1)), Some(date(2024, 6, 1)));
    let inputs = sample_inputs();

    c.bench_function("compute_entitlement", |b| {
        b.iter(|| compute_entitlement(black_box(&duration), black_box(&inputs)))
    });
}

fn bench_workflow_snapshot(c: &mut Criterion) {
    let workflow = workflow_in_clearance();

    c.bench_function("workflow_summary", |b| b.iter(|| workflow.summary()));
}

fn bench_repeated_reads(c: &mut Criterion) {
    let workflow = workflow_in_clearance();
    let inputs = sample_inputs();

    let mut group = c.benchmark_group("recompute_on_read");
    for reads in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(reads), &reads, |b, &reads| {
            b.iter(|| {
                for _ in 0..reads {
                    black_box(workflow.entitlement(black_box(&inputs)));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_service_duration,
    bench_entitlement,
    bench_workflow_snapshot,
    bench_repeated_reads
);
criterion_main!(benches);

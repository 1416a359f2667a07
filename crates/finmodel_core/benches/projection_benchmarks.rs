//! Criterion benchmarks for finmodel_core projections
//!
//! Run with: cargo bench -p finmodel_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use finmodel_core::{
    CarryForward, ModelBuilder, Recurrence, ScheduledRule, recurring_between_accounts,
};

fn savings_rules() -> Vec<ScheduledRule<&'static str>> {
    vec![
        recurring_between_accounts(Recurrence::Monthly, "Contributions", "Balance", |_| 500.0),
        recurring_between_accounts(Recurrence::Monthly, "Interest", "Balance", |bal| {
            bal * 0.07 / 12.0
        }),
        recurring_between_accounts(Recurrence::Quarterly, "Fees", "Balance", |bal| {
            -bal * 0.002 / 4.0
        }),
    ]
}

fn bench_projection_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_length");

    for years in [5u32, 10, 30] {
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, &years| {
            b.iter(|| {
                let model = ModelBuilder::new("bench")
                    .years(years)
                    .rules(savings_rules())
                    .build()
                    .unwrap();
                black_box(model.balance(&"Balance"))
            });
        });
    }

    group.finish();
}

fn bench_carry_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("carry_forward");

    for policy in [CarryForward::Contiguous, CarryForward::Sparse] {
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| {
                let model = ModelBuilder::new("bench")
                    .years(10)
                    .carry_forward(policy)
                    .rules(savings_rules())
                    .build()
                    .unwrap();
                black_box(model.balance_by_period(&"Balance"))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection_length, bench_carry_forward);
criterion_main!(benches);

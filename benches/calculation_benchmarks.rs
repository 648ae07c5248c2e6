//! Performance benchmarks for the shift ledger.
//!
//! This benchmark suite verifies that the calculation engine meets
//! performance targets:
//! - Building a full year calendar: < 1ms mean
//! - Single pay period calculation: < 100μs mean
//! - Full month summary over a seeded year: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shiftledger::calculation::{build_year, calculate_month, calculate_period, seed_year};
use shiftledger::config::ConfigLoader;
use shiftledger::models::{JobProfile, PayPeriod};
use shiftledger::store::{DayStore, DayUpdate, MemoryStore};

fn unc_nursing() -> JobProfile {
    JobProfile {
        job_name: "unc_nursing".to_string(),
        hourly_rate: Decimal::new(5450, 2),
        overtime_rate: Decimal::new(9065, 2),
        weekend_rate: Decimal::new(1000, 2),
        night_rate: Decimal::new(425, 2),
        critical_rate: Decimal::new(750, 2),
    }
}

/// Seeds 2025 and marks a Tuesday-to-Friday roster across July.
fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.upsert_job(&unc_nursing()).expect("seed job");
    seed_year(&mut store, 2025, "unc_nursing").expect("seed year");

    for day in [1, 2, 3, 4, 8, 9, 10, 11, 15, 16, 17, 18, 22, 23, 24, 25] {
        let date = NaiveDate::from_ymd_opt(2025, 7, day).expect("valid date");
        store
            .set_day_field(date, DayUpdate::Working(true))
            .expect("toggle day");
    }
    store
}

fn mid_july_period() -> PayPeriod {
    PayPeriod {
        pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date"),
        start_date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid date"),
    }
}

/// Benchmark: building a full year of day records.
///
/// Target: < 1ms mean
fn bench_build_year(c: &mut Criterion) {
    let job = unc_nursing();

    let mut group = c.benchmark_group("calendar");
    group.throughput(Throughput::Elements(365));
    group.bench_function("build_year", |b| {
        b.iter(|| build_year(black_box(2025), black_box(&job)));
    });
    group.finish();
}

/// Benchmark: calculating one biweekly pay period.
///
/// Target: < 100μs mean
fn bench_calculate_period(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    let store = seeded_store();
    let job = unc_nursing();
    let period = mid_july_period();

    c.bench_function("calculate_period", |b| {
        b.iter(|| {
            calculate_period(
                black_box(&store),
                black_box(&period),
                black_box(&job),
                config.params(),
            )
            .expect("period calculation")
        });
    });
}

/// Benchmark: full month summaries across period counts.
///
/// Target: < 1ms mean
fn bench_calculate_month(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    let store = seeded_store();

    let mut group = c.benchmark_group("calculate_month");
    for month in [6u32, 7] {
        let periods = config
            .schedule()
            .periods_for_month(month)
            .expect("scheduled month")
            .len();
        group.bench_with_input(
            BenchmarkId::new("periods", periods),
            &month,
            |b, &month| {
                b.iter(|| {
                    calculate_month(
                        black_box(&store),
                        config.schedule(),
                        config.params(),
                        black_box(month),
                    )
                    .expect("month calculation")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_year,
    bench_calculate_period,
    bench_calculate_month
);
criterion_main!(benches);

//! Performance benchmarks for the worktime engine.
//!
//! This benchmark suite measures:
//! - Building the record index for 100 users over a year of data
//! - Aggregating one user over a year with every view enabled
//! - Aggregating batches of users over a month
//! - Expanding a full-day leave request over a quarter
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use worktime_engine::calculation::{LeaveRequest, RecordIndex, aggregate, expand_leave};
use worktime_engine::config::EngineConfig;
use worktime_engine::models::{
    ActivityPerformance, Company, EmploymentContract, Holiday, Leave, LeaveDate, LeaveStatus,
    LeaveType, Performance, RangeOptions, RecordSet, Timesheet, TimesheetStatus, User,
    WorkSchedule,
};

fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

/// Creates a record set with `user_count` full-time users, each with one
/// timesheet per month of 2024, a performance on every weekday and a day of
/// approved leave every month.
fn create_records(user_count: usize) -> RecordSet {
    let mut records = RecordSet {
        companies: vec![Company {
            id: "co_be".to_string(),
            name: "Inuits".to_string(),
            country: "BE".to_string(),
        }],
        work_schedules: vec![WorkSchedule::weekdays("ws_fulltime", Decimal::new(8, 0))],
        holidays: [(1, 1), (4, 1), (5, 1), (7, 21), (8, 15), (11, 1), (11, 11), (12, 25)]
            .iter()
            .enumerate()
            .map(|(i, (month, day))| Holiday {
                id: format!("hol_{:02}", i),
                name: "Holiday".to_string(),
                date: make_date(2024, *month, *day),
                country: "BE".to_string(),
            })
            .collect(),
        leave_types: vec![LeaveType {
            id: "lt_vacation".to_string(),
            name: "Vacation".to_string(),
        }],
        ..RecordSet::default()
    };

    for u in 0..user_count {
        let user_id = format!("usr_{:04}", u);
        records.users.push(User {
            id: user_id.clone(),
            username: user_id.clone(),
            is_active: true,
        });
        records.employment_contracts.push(EmploymentContract {
            id: format!("ec_{:04}", u),
            user_id: user_id.clone(),
            company_id: "co_be".to_string(),
            work_schedule_id: "ws_fulltime".to_string(),
            started_at: make_date(2023, 1, 1),
            ended_at: None,
        });

        let leave_id = format!("lv_{:04}", u);
        records.leaves.push(Leave {
            id: leave_id.clone(),
            user_id: user_id.clone(),
            leave_type_id: "lt_vacation".to_string(),
            status: LeaveStatus::Approved,
            description: None,
        });

        for month in 1..=12 {
            let timesheet_id = format!("ts_{:04}_{:02}", u, month);
            records.timesheets.push(Timesheet {
                id: timesheet_id.clone(),
                user_id: user_id.clone(),
                year: 2024,
                month,
                status: TimesheetStatus::Active,
            });

            let leave_day = make_date(2024, month, 10);
            records.leave_dates.push(
                LeaveDate::new(
                    format!("ld_{:04}_{:02}", u, month),
                    leave_id.as_str(),
                    timesheet_id.as_str(),
                    at(leave_day, 8),
                    at(leave_day, 16),
                )
                .unwrap(),
            );

            let first = make_date(2024, month, 1);
            for day in first.iter_days().take_while(|d| d.month() == month) {
                if day.weekday().number_from_monday() > 5 {
                    continue;
                }
                records.performances.push(Performance::Activity(ActivityPerformance {
                    id: format!("pf_{:04}_{}", u, day),
                    timesheet_id: timesheet_id.clone(),
                    date: day,
                    contract_id: format!("ct_{:02}", day.day() % 4),
                    duration: Decimal::new(8, 0),
                    description: None,
                }));
            }
        }
    }

    records
}

/// Benchmark: Building the index for 100 users.
fn bench_build_index(c: &mut Criterion) {
    let records = create_records(100);
    let config = EngineConfig::default();

    c.bench_function("build_index_100_users", |b| {
        b.iter(|| black_box(RecordIndex::build(black_box(&records), &config).unwrap()))
    });
}

/// Benchmark: One user over a full year with daily, detailed and summary views.
fn bench_full_year(c: &mut Criterion) {
    let records = create_records(1);
    let config = EngineConfig::default();
    let index = RecordIndex::build(&records, &config).unwrap();

    c.bench_function("full_year_single_user", |b| {
        b.iter(|| {
            black_box(
                aggregate(
                    &index,
                    &["usr_0000"],
                    make_date(2024, 1, 1),
                    make_date(2024, 12, 31),
                    RangeOptions::all(),
                )
                .unwrap(),
            )
        })
    });
}

/// Benchmark: One month for batches of users.
fn bench_user_batches(c: &mut Criterion) {
    let records = create_records(1000);
    let config = EngineConfig::default();
    let index = RecordIndex::build(&records, &config).unwrap();
    let all_ids: Vec<&str> = records.users.iter().map(|u| u.id.as_str()).collect();

    let mut group = c.benchmark_group("user_batches");
    for size in [10usize, 100, 1000] {
        let user_ids = &all_ids[..size];
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &user_ids, |b, ids| {
            b.iter(|| {
                black_box(
                    aggregate(
                        &index,
                        ids,
                        make_date(2024, 3, 1),
                        make_date(2024, 3, 31),
                        RangeOptions {
                            summary: true,
                            ..RangeOptions::default()
                        },
                    )
                    .unwrap(),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark: Expanding a full-day leave request over a quarter.
fn bench_expand_quarter(c: &mut Criterion) {
    let records = create_records(1);
    let config = EngineConfig::default();
    let index = RecordIndex::build(&records, &config).unwrap();
    let request = LeaveRequest {
        user_id: "usr_0000".to_string(),
        leave_type_id: "lt_vacation".to_string(),
        description: None,
        starts_at: at(make_date(2024, 4, 1), 0),
        ends_at: at(make_date(2024, 6, 30), 0),
        full_day: true,
    };

    c.bench_function("expand_leave_quarter", |b| {
        b.iter(|| black_box(expand_leave(&index, black_box(&request)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_full_year,
    bench_user_batches,
    bench_expand_quarter
);
criterion_main!(benches);

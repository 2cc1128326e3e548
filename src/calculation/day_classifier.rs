//! Day classification.
//!
//! This module decides the [`DayStatus`] of one day for one user and how
//! many hours were expected on it. Rules are evaluated in order and the
//! first match wins:
//!
//! 1. no contract, or no scheduled hours: `NoWork`, nothing expected
//! 2. a holiday in the company's country: `Holiday`, nothing expected
//! 3. approved leave touching the day: `Sickness` or `Leave`, scheduled hours expected
//! 4. otherwise: `Workday`, scheduled hours expected

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayStatus, Holiday};

use super::record_index::{LeaveEntry, ResolvedContract};

/// The outcome of classifying one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The classification of the day.
    pub status: DayStatus,
    /// Hours counted as expected.
    pub expected_hours: Decimal,
    /// Hours the work schedule lists for the weekday, whatever the status.
    pub scheduled_hours: Decimal,
}

/// Classifies a day.
///
/// This is a pure function of its inputs. `holidays` may include holidays of
/// other countries and dates; only those matching the contract's country on
/// `day` count. Likewise only approved leave dates touching `day` count.
///
/// Leave consumes rather than removes the expectation: a leave day still
/// expects the scheduled hours, so balances can subtract the leave taken.
///
/// # Arguments
///
/// * `day` - The day to classify
/// * `contract` - The employment contract in force on `day`, if any
/// * `holidays` - Holiday records for `day`
/// * `leave_entries` - Leave dates of the user for `day`
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::classify_day;
/// use worktime_engine::models::DayStatus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let classification = classify_day(day, None, &[], &[]);
/// assert_eq!(classification.status, DayStatus::NoWork);
/// assert_eq!(classification.expected_hours, Decimal::ZERO);
/// ```
pub fn classify_day(
    day: NaiveDate,
    contract: Option<&ResolvedContract<'_>>,
    holidays: &[&Holiday],
    leave_entries: &[LeaveEntry<'_>],
) -> DayClassification {
    let Some(contract) = contract else {
        return DayClassification {
            status: DayStatus::NoWork,
            expected_hours: Decimal::ZERO,
            scheduled_hours: Decimal::ZERO,
        };
    };

    let scheduled_hours = contract.hours_for(day.weekday());
    if scheduled_hours <= Decimal::ZERO {
        return DayClassification {
            status: DayStatus::NoWork,
            expected_hours: Decimal::ZERO,
            scheduled_hours,
        };
    }

    if holidays
        .iter()
        .any(|holiday| holiday.applies_to(contract.country(), day))
    {
        return DayClassification {
            status: DayStatus::Holiday,
            expected_hours: Decimal::ZERO,
            scheduled_hours,
        };
    }

    let mut approved = leave_entries
        .iter()
        .filter(|entry| entry.is_approved() && entry.leave_date.overlaps_day(day))
        .peekable();

    if approved.peek().is_some() {
        let status = if approved.any(|entry| entry.is_sickness) {
            DayStatus::Sickness
        } else {
            DayStatus::Leave
        };
        return DayClassification {
            status,
            expected_hours: scheduled_hours,
            scheduled_hours,
        };
    }

    DayClassification {
        status: DayStatus::Workday,
        expected_hours: scheduled_hours,
        scheduled_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Company, EmploymentContract, Leave, LeaveDate, LeaveStatus, WorkSchedule};
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    struct Fixture {
        contract: EmploymentContract,
        company: Company,
        schedule: WorkSchedule,
    }

    impl Fixture {
        fn new() -> Self {
            let mut schedule = WorkSchedule::weekdays("ws_001", dec("8"));
            schedule.friday = dec("7.5");
            Self {
                contract: EmploymentContract {
                    id: "ec_001".to_string(),
                    user_id: "usr_001".to_string(),
                    company_id: "co_be".to_string(),
                    work_schedule_id: "ws_001".to_string(),
                    started_at: make_date("2024-01-01"),
                    ended_at: None,
                },
                company: Company {
                    id: "co_be".to_string(),
                    name: "Inuits".to_string(),
                    country: "BE".to_string(),
                },
                schedule,
            }
        }

        fn resolved(&self) -> ResolvedContract<'_> {
            ResolvedContract {
                contract: &self.contract,
                company: &self.company,
                work_schedule: &self.schedule,
            }
        }
    }

    fn holiday(date: &str, country: &str) -> Holiday {
        Holiday {
            id: format!("hol_{}_{}", country, date),
            name: "Holiday".to_string(),
            date: make_date(date),
            country: country.to_string(),
        }
    }

    fn leave(status: LeaveStatus) -> Leave {
        Leave {
            id: "lv_001".to_string(),
            user_id: "usr_001".to_string(),
            leave_type_id: "lt_001".to_string(),
            status,
            description: None,
        }
    }

    fn leave_date(date: &str, from: &str, until: &str) -> LeaveDate {
        LeaveDate::new(
            "ld_001",
            "lv_001",
            "ts_001",
            make_datetime(date, from),
            make_datetime(date, until),
        )
        .unwrap()
    }

    // ==========================================================================
    // DC-001: No contract means no work
    // ==========================================================================
    #[test]
    fn test_dc_001_no_contract_is_no_work() {
        let result = classify_day(make_date("2024-03-04"), None, &[], &[]);
        assert_eq!(result.status, DayStatus::NoWork);
        assert_eq!(result.expected_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // DC-002: Weekend with zero scheduled hours is no work, even on a holiday
    // ==========================================================================
    #[test]
    fn test_dc_002_zero_hours_beats_holiday() {
        let fixture = Fixture::new();
        let sunday_holiday = holiday("2024-03-31", "BE");

        let result = classify_day(
            make_date("2024-03-31"),
            Some(&fixture.resolved()),
            &[&sunday_holiday],
            &[],
        );
        assert_eq!(result.status, DayStatus::NoWork);
        assert_eq!(result.expected_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // DC-003: Holiday overrides a scheduled workday
    // ==========================================================================
    #[test]
    fn test_dc_003_holiday_overrides_workday() {
        let fixture = Fixture::new();
        let easter_monday = holiday("2024-04-01", "BE");

        let result = classify_day(
            make_date("2024-04-01"),
            Some(&fixture.resolved()),
            &[&easter_monday],
            &[],
        );
        assert_eq!(result.status, DayStatus::Holiday);
        assert_eq!(result.expected_hours, Decimal::ZERO);
        assert_eq!(result.scheduled_hours, dec("8"));
    }

    // ==========================================================================
    // DC-004: Duplicate holiday records change nothing
    // ==========================================================================
    #[test]
    fn test_dc_004_duplicate_holidays_are_idempotent() {
        let fixture = Fixture::new();
        let first = holiday("2024-04-01", "BE");
        let second = holiday("2024-04-01", "BE");

        let once = classify_day(make_date("2024-04-01"), Some(&fixture.resolved()), &[&first], &[]);
        let twice = classify_day(
            make_date("2024-04-01"),
            Some(&fixture.resolved()),
            &[&first, &second],
            &[],
        );
        assert_eq!(once, twice);
    }

    // ==========================================================================
    // DC-005: Holiday of another country is ignored
    // ==========================================================================
    #[test]
    fn test_dc_005_foreign_holiday_is_ignored() {
        let fixture = Fixture::new();
        let dutch_holiday = holiday("2024-04-27", "NL");

        // 2024-04-26 is a Friday; pass a Dutch holiday on the same date
        let dutch_same_day = holiday("2024-04-26", "NL");
        let result = classify_day(
            make_date("2024-04-26"),
            Some(&fixture.resolved()),
            &[&dutch_holiday, &dutch_same_day],
            &[],
        );
        assert_eq!(result.status, DayStatus::Workday);
        assert_eq!(result.expected_hours, dec("7.5"));
    }

    // ==========================================================================
    // DC-006: Approved leave keeps the expected hours
    // ==========================================================================
    #[test]
    fn test_dc_006_approved_leave_consumes_expectation() {
        let fixture = Fixture::new();
        let leave = leave(LeaveStatus::Approved);
        let date = leave_date("2024-03-05", "08:00:00", "16:00:00");
        let entries = [LeaveEntry {
            leave_date: &date,
            leave: &leave,
            is_sickness: false,
        }];

        let result = classify_day(make_date("2024-03-05"), Some(&fixture.resolved()), &[], &entries);
        assert_eq!(result.status, DayStatus::Leave);
        assert_eq!(result.expected_hours, dec("8"));
    }

    // ==========================================================================
    // DC-007: Sickness leave is reported as sickness
    // ==========================================================================
    #[test]
    fn test_dc_007_sickness_leave() {
        let fixture = Fixture::new();
        let leave = leave(LeaveStatus::Approved);
        let date = leave_date("2024-03-05", "13:00:00", "15:00:00");
        let entries = [LeaveEntry {
            leave_date: &date,
            leave: &leave,
            is_sickness: true,
        }];

        let result = classify_day(make_date("2024-03-05"), Some(&fixture.resolved()), &[], &entries);
        assert_eq!(result.status, DayStatus::Sickness);
        assert_eq!(result.expected_hours, dec("8"));
    }

    // ==========================================================================
    // DC-008: Pending and rejected leave do not count
    // ==========================================================================
    #[test]
    fn test_dc_008_unapproved_leave_is_ignored() {
        let fixture = Fixture::new();
        let date = leave_date("2024-03-05", "08:00:00", "16:00:00");

        for status in [LeaveStatus::Draft, LeaveStatus::Pending, LeaveStatus::Rejected] {
            let leave = leave(status);
            let entries = [LeaveEntry {
                leave_date: &date,
                leave: &leave,
                is_sickness: false,
            }];

            let result =
                classify_day(make_date("2024-03-05"), Some(&fixture.resolved()), &[], &entries);
            assert_eq!(result.status, DayStatus::Workday, "status {:?}", status);
        }
    }

    // ==========================================================================
    // DC-009: Holiday wins over approved leave
    // ==========================================================================
    #[test]
    fn test_dc_009_holiday_beats_leave() {
        let fixture = Fixture::new();
        let easter_monday = holiday("2024-04-01", "BE");
        let leave = leave(LeaveStatus::Approved);
        let date = leave_date("2024-04-01", "08:00:00", "16:00:00");
        let entries = [LeaveEntry {
            leave_date: &date,
            leave: &leave,
            is_sickness: false,
        }];

        let result = classify_day(
            make_date("2024-04-01"),
            Some(&fixture.resolved()),
            &[&easter_monday],
            &entries,
        );
        assert_eq!(result.status, DayStatus::Holiday);
    }

    // ==========================================================================
    // DC-010: Leave dates of other days are ignored
    // ==========================================================================
    #[test]
    fn test_dc_010_leave_on_other_day_is_ignored() {
        let fixture = Fixture::new();
        let leave = leave(LeaveStatus::Approved);
        let date = leave_date("2024-03-06", "08:00:00", "16:00:00");
        let entries = [LeaveEntry {
            leave_date: &date,
            leave: &leave,
            is_sickness: false,
        }];

        let result = classify_day(make_date("2024-03-05"), Some(&fixture.resolved()), &[], &entries);
        assert_eq!(result.status, DayStatus::Workday);
    }

    // ==========================================================================
    // DC-011: Classification is repeatable
    // ==========================================================================
    #[test]
    fn test_dc_011_classification_is_pure() {
        let fixture = Fixture::new();
        let day = make_date("2024-03-08");

        let first = classify_day(day, Some(&fixture.resolved()), &[], &[]);
        let second = classify_day(day, Some(&fixture.resolved()), &[], &[]);
        assert_eq!(first, second);
        assert_eq!(first.expected_hours, dec("7.5"));
    }
}

//! Range aggregation.
//!
//! This module walks every day of a date range for a set of users, resolves
//! the employment contract in force, classifies the day and folds the
//! results into one [`RangeInfo`] per user.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ContractSummary, DayDetail, DayStatus, OVERLAPPING_CONTRACTS, RangeInfo, RangeOptions,
    RangeWarning, RecordSet, UNRESOLVED_USER,
};

use super::day_classifier::classify_day;
use super::record_index::RecordIndex;
use super::temporal_resolver::ContractResolver;

/// Checks that `until` does not come before `from`.
pub fn ensure_range(from: NaiveDate, until: NaiveDate) -> EngineResult<()> {
    if until < from {
        return Err(EngineError::invalid_range(from, until));
    }
    Ok(())
}

/// Returns every day of `[from, until]` in order.
pub fn days_in_range(from: NaiveDate, until: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |day| *day <= until)
}

/// Aggregates the range info of several users.
///
/// Users are processed independently: a user without any employment
/// contract in the range gets `NoWork` for every day and an
/// `UNRESOLVED_USER` warning, without affecting the other users. A user
/// whose contracts overlap is reported the same way with a high-severity
/// `OVERLAPPING_CONTRACTS` warning instead.
///
/// # Arguments
///
/// * `index` - The indexed records
/// * `user_ids` - The users to aggregate
/// * `from` - First day of the range (inclusive)
/// * `until` - Last day of the range (inclusive)
/// * `options` - Which optional views to include
///
/// # Returns
///
/// A map from user id to [`RangeInfo`], or `InvalidRange` if `until` comes
/// before `from`.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::{RecordIndex, aggregate};
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::{DayStatus, RangeOptions, RecordSet};
/// use chrono::NaiveDate;
///
/// let records = RecordSet::default();
/// let config = EngineConfig::default();
/// let index = RecordIndex::build(&records, &config).unwrap();
///
/// let from = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let until = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let options = RangeOptions { daily: true, ..RangeOptions::default() };
///
/// let infos = aggregate(&index, &["usr_001"], from, until, options).unwrap();
/// let info = &infos["usr_001"];
/// assert_eq!(info.details.as_ref().unwrap().len(), 7);
/// assert!(info.details.as_ref().unwrap().iter().all(|d| d.status == DayStatus::NoWork));
/// assert_eq!(info.warnings[0].code, "UNRESOLVED_USER");
/// ```
pub fn aggregate(
    index: &RecordIndex<'_>,
    user_ids: &[&str],
    from: NaiveDate,
    until: NaiveDate,
    options: RangeOptions,
) -> EngineResult<BTreeMap<String, RangeInfo>> {
    ensure_range(from, until)?;

    let infos: BTreeMap<String, RangeInfo> = user_ids
        .iter()
        .map(|user_id| {
            (
                user_id.to_string(),
                aggregate_user(index, user_id, from, until, options),
            )
        })
        .collect();

    info!(
        users = infos.len(),
        from = %from,
        until = %until,
        "Aggregated range info"
    );

    Ok(infos)
}

/// Builds the index for `records` and aggregates the range info of several users.
///
/// See [`aggregate`].
pub fn get_range_info(
    records: &RecordSet,
    config: &EngineConfig,
    user_ids: &[&str],
    from: NaiveDate,
    until: NaiveDate,
    options: RangeOptions,
) -> EngineResult<BTreeMap<String, RangeInfo>> {
    let index = RecordIndex::build(records, config)?;
    aggregate(&index, user_ids, from, until, options)
}

/// Aggregates the range info of one user.
///
/// The range must already be valid (see [`ensure_range`]); an inverted
/// range yields an info without any day.
pub fn aggregate_user(
    index: &RecordIndex<'_>,
    user_id: &str,
    from: NaiveDate,
    until: NaiveDate,
    options: RangeOptions,
) -> RangeInfo {
    let mut info = RangeInfo::empty(user_id, from, until);
    let mut resolver = ContractResolver::for_user(index, user_id);
    let mut details = Vec::new();
    let mut summary: BTreeMap<&str, ContractSummary> = BTreeMap::new();
    let mut resolved_any = false;

    for day in days_in_range(from, until) {
        let contract = resolver.resolve(day);
        resolved_any |= contract.is_some();

        let leave_entries = index.leave_entries_on(user_id, day);
        let classification =
            classify_day(day, contract.as_ref(), index.holidays_on(day), leave_entries);

        let mut day_leave_hours = Decimal::ZERO;
        if classification.status.is_absence() {
            for entry in leave_entries.iter().filter(|entry| entry.is_approved()) {
                let hours = entry.leave_date.hours_on(day);
                if entry.is_sickness {
                    info.sickness_hours += hours;
                } else {
                    info.leave_hours += hours;
                }
                day_leave_hours += hours;
            }
        }

        if classification.status == DayStatus::Holiday {
            info.holiday_hours += classification.scheduled_hours;
        }
        info.expected_hours += classification.expected_hours;

        let performances = index.performances_on(user_id, day);
        let performed_hours: Decimal = performances.iter().map(|p| p.duration()).sum();
        info.performed_hours += performed_hours;

        if options.summary {
            for performance in performances {
                let entry = summary
                    .entry(performance.contract_id())
                    .or_insert_with(|| ContractSummary {
                        contract_id: performance.contract_id().to_string(),
                        duration: Decimal::ZERO,
                        standby_count: 0,
                    });
                entry.duration += performance.duration();
                if performance.is_standby() {
                    entry.standby_count += 1;
                }
            }
        }

        if options.wants_days() {
            details.push(DayDetail {
                date: day,
                status: classification.status,
                expected_hours: classification.expected_hours,
                performed_hours,
                leave_hours: day_leave_hours,
                performances: if options.detailed {
                    performances.iter().map(|p| (*p).clone()).collect()
                } else {
                    vec![]
                },
            });
        }
    }

    let accounted = info.performed_hours + info.leave_hours + info.sickness_hours;
    info.remaining_hours = (info.expected_hours - accounted).max(Decimal::ZERO);
    info.overtime_hours = (accounted - info.expected_hours).max(Decimal::ZERO);

    if options.wants_days() {
        info.details = Some(details);
    }
    if options.summary {
        info.summary = Some(summary.into_values().collect());
    }

    if let Err(conflict) = index.ensure_contracts(user_id) {
        warn!(user_id = %user_id, error = %conflict, "Skipping contracts of user");
        info.warnings.push(RangeWarning {
            code: OVERLAPPING_CONTRACTS.to_string(),
            message: conflict.to_string(),
            severity: "high".to_string(),
        });
    } else if !resolved_any {
        warn!(user_id = %user_id, from = %from, until = %until, "No employment contract in range");
        info.warnings.push(RangeWarning {
            code: UNRESOLVED_USER.to_string(),
            message: format!(
                "User '{}' has no employment contract between {} and {}",
                user_id, from, until
            ),
            severity: "low".to_string(),
        });
    }

    debug!(
        user_id = %user_id,
        expected_hours = %info.expected_hours,
        performed_hours = %info.performed_hours,
        "Aggregated user range"
    );

    info
}

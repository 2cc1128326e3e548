//! Leave request expansion.
//!
//! A leave request covers a span of time. Partial-day requests are taken
//! literally; full-day requests are broken into one interval per working
//! day, starting at the configured working-day start hour and lasting as
//! long as the work schedule says. Holidays and days without scheduled
//! hours are skipped.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayStatus, Leave, LeaveDate, LeaveStatus, Timesheet};

use super::day_classifier::classify_day;
use super::range_aggregator::days_in_range;
use super::record_index::RecordIndex;
use super::temporal_resolver::ContractResolver;
use super::timesheet_assigner::TimesheetAssigner;

/// One interval of leave produced by the expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePair {
    /// Start of the interval.
    pub starts_at: NaiveDateTime,
    /// End of the interval.
    pub ends_at: NaiveDateTime,
}

/// A request for leave as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The requesting user.
    pub user_id: String,
    /// The kind of leave requested.
    pub leave_type_id: String,
    /// Free-text reason.
    #[serde(default)]
    pub description: Option<String>,
    /// Start of the requested span.
    pub starts_at: NaiveDateTime,
    /// End of the requested span.
    pub ends_at: NaiveDateTime,
    /// Whether the span is to be expanded into full working days.
    #[serde(default)]
    pub full_day: bool,
}

/// Records produced by [`request_leave`], ready to be persisted together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestOutcome {
    /// The new leave, in `Pending` status.
    pub leave: Leave,
    /// One leave date per interval, in chronological order.
    pub leave_dates: Vec<LeaveDate>,
    /// Timesheets that did not exist yet and were created for the leave dates.
    pub created_timesheets: Vec<Timesheet>,
    /// Whether the leave type counts as sickness.
    pub is_sickness: bool,
}

/// Expands a leave request into leave intervals.
///
/// # Arguments
///
/// * `index` - The indexed records
/// * `request` - The leave request
///
/// # Returns
///
/// The intervals in chronological order, or:
/// - `InvalidRange` if the request ends before it starts
/// - `NoEligibleDays` if a full-day request covers no working day
/// - `OverlappingContracts` if a full-day request is made for a user whose
///   employment contracts overlap
/// - `InvalidConfig` if a working day cannot be scheduled before midnight
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::{LeaveRequest, RecordIndex, expand_leave};
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::RecordSet;
/// use chrono::NaiveDate;
///
/// let records = RecordSet::default();
/// let config = EngineConfig::default();
/// let index = RecordIndex::build(&records, &config).unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let request = LeaveRequest {
///     user_id: "usr_001".to_string(),
///     leave_type_id: "lt_vacation".to_string(),
///     description: None,
///     starts_at: day.and_hms_opt(13, 0, 0).unwrap(),
///     ends_at: day.and_hms_opt(17, 0, 0).unwrap(),
///     full_day: false,
/// };
///
/// let pairs = expand_leave(&index, &request).unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].starts_at, request.starts_at);
/// assert_eq!(pairs[0].ends_at, request.ends_at);
/// ```
pub fn expand_leave(index: &RecordIndex<'_>, request: &LeaveRequest) -> EngineResult<Vec<LeavePair>> {
    if request.ends_at < request.starts_at {
        return Err(EngineError::InvalidRange {
            from: request.starts_at.to_string(),
            until: request.ends_at.to_string(),
        });
    }

    if !request.full_day {
        return Ok(vec![LeavePair {
            starts_at: request.starts_at,
            ends_at: request.ends_at,
        }]);
    }

    index.ensure_contracts(&request.user_id)?;
    let start_hour = index.config().working_day_starting_hour;
    let mut resolver = ContractResolver::for_user(index, &request.user_id);
    let mut pairs = Vec::new();

    for day in days_in_range(request.starts_at.date(), request.ends_at.date()) {
        let contract = resolver.resolve(day);
        let classification = classify_day(day, contract.as_ref(), index.holidays_on(day), &[]);

        if classification.status != DayStatus::Workday {
            debug!(day = %day, status = %classification.status, "Skipping day for leave");
            continue;
        }

        pairs.push(working_day_pair(day, start_hour, classification.expected_hours)?);
    }

    if pairs.is_empty() {
        return Err(EngineError::NoEligibleDays {
            starts_at: request.starts_at,
            ends_at: request.ends_at,
        });
    }

    Ok(pairs)
}

/// Builds the leave interval covering the working hours of `day`.
///
/// The interval starts at `start_hour` and lasts `hours`. The fractional
/// part of `hours` is converted to whole minutes, rounding half away from
/// zero, so 7.5 hours ends 7h30m after the start. The interval may end at
/// the next midnight at the latest; anything later is `InvalidConfig`.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::working_day_pair;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let pair = working_day_pair(day, 8, Decimal::new(75, 1)).unwrap();
/// assert_eq!(pair.starts_at, day.and_hms_opt(8, 0, 0).unwrap());
/// assert_eq!(pair.ends_at, day.and_hms_opt(15, 30, 0).unwrap());
/// ```
pub fn working_day_pair(day: NaiveDate, start_hour: u32, hours: Decimal) -> EngineResult<LeavePair> {
    let starts_at = day
        .and_hms_opt(start_hour, 0, 0)
        .ok_or_else(|| EngineError::InvalidConfig {
            field: "working_day_starting_hour".to_string(),
            message: format!("{} is not an hour of the day", start_hour),
        })?;

    let unschedulable = || EngineError::InvalidConfig {
        field: "work_schedule".to_string(),
        message: format!("{} hours cannot be scheduled on {}", hours, day),
    };

    let whole_hours = hours.trunc().to_i64().ok_or_else(unschedulable)?;
    let minutes = (hours.fract() * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(unschedulable)?;

    let ends_at = Duration::try_hours(whole_hours)
        .zip(Duration::try_minutes(minutes))
        .and_then(|(h, m)| starts_at.checked_add_signed(h + m))
        .ok_or_else(unschedulable)?;

    let ends_on_day = ends_at.date() == day
        || day.succ_opt().and_then(|next| next.and_hms_opt(0, 0, 0)) == Some(ends_at);
    if !ends_on_day {
        return Err(unschedulable());
    }

    Ok(LeavePair { starts_at, ends_at })
}

/// Turns a leave request into a pending leave with its leave dates.
///
/// The request is expanded with [`expand_leave`], each interval is assigned
/// to its monthly timesheet (creating missing ones) and the leave moves from
/// `Draft` to `Pending` once every leave date exists. Nothing is returned on
/// failure, so the caller never sees a partial leave.
///
/// # Errors
///
/// - `UserNotFound` / `LeaveTypeNotFound` for unknown references
/// - any error of [`expand_leave`]
/// - `InvalidLeaveDate` when an interval has no length
pub fn request_leave(
    index: &RecordIndex<'_>,
    request: &LeaveRequest,
) -> EngineResult<LeaveRequestOutcome> {
    let user = index
        .user(&request.user_id)
        .ok_or_else(|| EngineError::UserNotFound {
            user_id: request.user_id.clone(),
        })?;
    let leave_type =
        index
            .leave_type(&request.leave_type_id)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                leave_type_id: request.leave_type_id.clone(),
            })?;

    let pairs = expand_leave(index, request)?;

    let mut leave = Leave {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        leave_type_id: leave_type.id.clone(),
        status: LeaveStatus::Draft,
        description: request.description.clone(),
    };

    let mut assigner = TimesheetAssigner::new(user.id.as_str(), index.timesheets_for(&user.id));
    let leave_dates = pairs
        .iter()
        .map(|pair| {
            let timesheet = assigner.assign(pair);
            LeaveDate::new(
                Uuid::new_v4().to_string(),
                leave.id.as_str(),
                timesheet.id.as_str(),
                pair.starts_at,
                pair.ends_at,
            )
        })
        .collect::<EngineResult<Vec<_>>>()?;

    leave.submit()?;

    info!(
        leave_id = %leave.id,
        user_id = %user.id,
        leave_type = %leave_type.name,
        leave_dates = leave_dates.len(),
        created_timesheets = assigner.created().len(),
        "Requested leave"
    );

    Ok(LeaveRequestOutcome {
        is_sickness: index.sickness().is_sickness(&leave_type.id),
        leave,
        leave_dates,
        created_timesheets: assigner.into_created(),
    })
}

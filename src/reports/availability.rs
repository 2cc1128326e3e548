//! Range availability for all active users.
//!
//! Unlike the day classification, the availability flags are independent:
//! a day on which the schedule expects no work can still be flagged as a
//! holiday, and a leave day can also be a holiday.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{ContractResolver, RecordIndex, days_in_range, ensure_range};
use crate::error::EngineResult;

/// The flagged days of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAvailability {
    /// Days without a contract or without scheduled hours.
    pub no_work: Vec<NaiveDate>,
    /// Holidays in the country of the employing company.
    pub holiday: Vec<NaiveDate>,
    /// Days with approved leave.
    pub leave: Vec<NaiveDate>,
    /// Days with approved sickness leave.
    pub sickness: Vec<NaiveDate>,
}

/// Availability of every active user over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAvailability {
    /// First day of the range.
    pub from: NaiveDate,
    /// Last day of the range.
    pub until: NaiveDate,
    /// Flagged days per user id.
    pub users: BTreeMap<String, UserAvailability>,
}

/// Computes the availability of all active users between `from` and `until`.
///
/// Returns `InvalidRange` if `until` comes before `from`.
pub fn range_availability(
    index: &RecordIndex<'_>,
    from: NaiveDate,
    until: NaiveDate,
) -> EngineResult<RangeAvailability> {
    ensure_range(from, until)?;

    let users: BTreeMap<String, UserAvailability> = index
        .users()
        .iter()
        .filter(|user| user.is_active)
        .map(|user| (user.id.clone(), user_availability(index, &user.id, from, until)))
        .collect();

    info!(users = users.len(), from = %from, until = %until, "Computed range availability");

    Ok(RangeAvailability { from, until, users })
}

fn user_availability(
    index: &RecordIndex<'_>,
    user_id: &str,
    from: NaiveDate,
    until: NaiveDate,
) -> UserAvailability {
    let mut availability = UserAvailability::default();
    let mut resolver = ContractResolver::for_user(index, user_id);

    for day in days_in_range(from, until) {
        let contract = resolver.resolve(day);

        let scheduled = contract.map_or(Decimal::ZERO, |c| c.hours_for(day.weekday()));
        if scheduled <= Decimal::ZERO {
            availability.no_work.push(day);
        }

        let is_holiday = contract.is_some_and(|contract| {
            index
                .holidays_on(day)
                .iter()
                .any(|holiday| holiday.applies_to(contract.country(), day))
        });
        if is_holiday {
            availability.holiday.push(day);
        }

        let approved: Vec<_> = index
            .leave_entries_on(user_id, day)
            .iter()
            .filter(|entry| entry.is_approved() && entry.leave_date.overlaps_day(day))
            .collect();
        if approved.iter().any(|entry| entry.is_sickness) {
            availability.sickness.push(day);
        }
        if approved.iter().any(|entry| !entry.is_sickness) {
            availability.leave.push(day);
        }
    }

    availability
}

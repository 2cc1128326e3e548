//! Yearly leave overview of a user.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::RecordIndex;

/// Approved leave hours of one month, per leave type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeaveOverview {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Hours per leave type name; every known leave type is listed.
    pub leave_type_hours: BTreeMap<String, Decimal>,
}

/// Builds twelve monthly rows of approved leave hours for a user.
///
/// A leave date counts towards the month it starts in. Each leave date's
/// hours are rounded to two decimals before summing.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::RecordIndex;
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::{LeaveType, RecordSet};
/// use worktime_engine::reports::user_leave_overview;
/// use rust_decimal::Decimal;
///
/// let records = RecordSet {
///     leave_types: vec![LeaveType { id: "lt_001".to_string(), name: "Vacation".to_string() }],
///     ..RecordSet::default()
/// };
/// let config = EngineConfig::default();
/// let index = RecordIndex::build(&records, &config).unwrap();
///
/// let overview = user_leave_overview(&index, "usr_001", 2024);
/// assert_eq!(overview.len(), 12);
/// assert_eq!(overview[0].leave_type_hours["Vacation"], Decimal::ZERO);
/// ```
pub fn user_leave_overview(
    index: &RecordIndex<'_>,
    user_id: &str,
    year: i32,
) -> Vec<MonthlyLeaveOverview> {
    let empty: BTreeMap<String, Decimal> = index
        .leave_types()
        .iter()
        .map(|leave_type| (leave_type.name.clone(), Decimal::ZERO))
        .collect();

    let mut months: Vec<MonthlyLeaveOverview> = (1..=12)
        .map(|month| MonthlyLeaveOverview {
            year,
            month,
            leave_type_hours: empty.clone(),
        })
        .collect();

    for entry in index.leave_entries_for(user_id) {
        let starts_at = entry.leave_date.starts_at;
        if !entry.is_approved() || starts_at.year() != year {
            continue;
        }
        let Some(leave_type) = index.leave_type(&entry.leave.leave_type_id) else {
            continue;
        };

        let row = &mut months[starts_at.month0() as usize];
        *row
            .leave_type_hours
            .entry(leave_type.name.clone())
            .or_default() += entry.leave_date.hours().round_dp(2);
    }

    months
}

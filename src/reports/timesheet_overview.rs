//! Per-timesheet overviews.
//!
//! Both overviews aggregate the range info of a timesheet's owner over the
//! month the timesheet covers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{RecordIndex, aggregate_user};
use crate::error::EngineResult;
use crate::models::{RangeInfo, RangeOptions, Timesheet};

/// Range info of a timesheet's month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetOverview {
    /// The timesheet.
    pub timesheet: Timesheet,
    /// Range info of the owner over the timesheet's month.
    pub range_info: RangeInfo,
}

/// Time performed on one contract within one timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetContractOverview {
    /// The timesheet.
    pub timesheet: Timesheet,
    /// The contract the time was performed on.
    pub contract_id: String,
    /// Name of the contract, if it is part of the record set.
    pub contract_name: Option<String>,
    /// Total hours performed on the contract.
    pub duration: Decimal,
}

/// Builds the range info of each timesheet's month.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::RecordIndex;
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::{RecordSet, Timesheet, TimesheetStatus};
/// use worktime_engine::reports::timesheet_overview;
/// use chrono::NaiveDate;
///
/// let records = RecordSet::default();
/// let config = EngineConfig::default();
/// let index = RecordIndex::build(&records, &config).unwrap();
///
/// let timesheet = Timesheet {
///     id: "ts_001".to_string(),
///     user_id: "usr_001".to_string(),
///     year: 2024,
///     month: 2,
///     status: TimesheetStatus::Active,
/// };
///
/// let overview = timesheet_overview(&index, &[&timesheet]).unwrap();
/// assert_eq!(overview[0].range_info.until, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn timesheet_overview(
    index: &RecordIndex<'_>,
    timesheets: &[&Timesheet],
) -> EngineResult<Vec<TimesheetOverview>> {
    timesheets
        .iter()
        .map(|timesheet| -> EngineResult<TimesheetOverview> {
            let range_info = timesheet_range_info(index, timesheet, RangeOptions::default())?;
            Ok(TimesheetOverview {
                timesheet: (*timesheet).clone(),
                range_info,
            })
        })
        .collect()
}

/// Lists the hours per contract of each timesheet.
///
/// When `contract_id` is given, only rows for that contract are returned.
pub fn timesheet_contract_overview(
    index: &RecordIndex<'_>,
    timesheets: &[&Timesheet],
    contract_id: Option<&str>,
) -> EngineResult<Vec<TimesheetContractOverview>> {
    let options = RangeOptions {
        summary: true,
        ..RangeOptions::default()
    };

    let mut rows = Vec::new();
    for timesheet in timesheets {
        let range_info = timesheet_range_info(index, timesheet, options)?;

        for summary in range_info.summary.unwrap_or_default() {
            if contract_id.is_some_and(|id| id != summary.contract_id) {
                continue;
            }
            rows.push(TimesheetContractOverview {
                timesheet: (*timesheet).clone(),
                contract_name: index
                    .contract(&summary.contract_id)
                    .map(|contract| contract.name().to_string()),
                contract_id: summary.contract_id,
                duration: summary.duration,
            });
        }
    }

    Ok(rows)
}

fn timesheet_range_info(
    index: &RecordIndex<'_>,
    timesheet: &Timesheet,
    options: RangeOptions,
) -> EngineResult<RangeInfo> {
    let (from, until) = timesheet.date_range()?;
    Ok(aggregate_user(index, &timesheet.user_id, from, until, options))
}

//! Timesheet model.
//!
//! A timesheet is the monthly bucket that leave dates and performances of a
//! user attach to.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lifecycle state of a timesheet.
///
/// Transitions are driven by the approval workflow, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    /// Open for changes.
    #[default]
    Active,
    /// Submitted and awaiting approval.
    Pending,
    /// Closed; no further changes.
    Closed,
}

/// The monthly timesheet of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Unique identifier for the timesheet.
    pub id: String,
    /// The owning user.
    pub user_id: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// The current lifecycle state.
    #[serde(default)]
    pub status: TimesheetStatus,
}

impl Timesheet {
    /// Returns true if this timesheet is the one for `(year, month)`.
    pub fn is_for(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Returns the first and last day of the timesheet's month.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::{Timesheet, TimesheetStatus};
    /// use chrono::NaiveDate;
    ///
    /// let timesheet = Timesheet {
    ///     id: "ts_001".to_string(),
    ///     user_id: "usr_001".to_string(),
    ///     year: 2024,
    ///     month: 2,
    ///     status: TimesheetStatus::Active,
    /// };
    ///
    /// let (first, last) = timesheet.date_range().unwrap();
    /// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    /// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    /// ```
    pub fn date_range(&self) -> EngineResult<(NaiveDate, NaiveDate)> {
        let invalid = || EngineError::InvalidTimesheetMonth {
            timesheet_id: self.id.clone(),
            year: self.year,
            month: self.month,
        };

        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(invalid)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        Ok((first, last))
    }

    /// Checks that the timesheet may be deleted.
    ///
    /// Only active timesheets can be deleted.
    pub fn ensure_deletable(&self) -> EngineResult<()> {
        if self.status != TimesheetStatus::Active {
            return Err(EngineError::TimesheetNotActive {
                timesheet_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

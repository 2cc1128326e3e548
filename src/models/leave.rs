//! Leave models: leave types, leaves and their leave dates.
//!
//! A [`Leave`] is requested by a user for one [`LeaveType`] and is made of
//! one or more [`LeaveDate`]s, each a contiguous interval within a single
//! day attached to the timesheet of that month.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A kind of leave (e.g., "Vacation", "Sickness").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Unique identifier for the leave type.
    pub id: String,
    /// The human-readable name of the leave type.
    pub name: String,
}

/// Approval state of a leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Being assembled; not yet visible to approvers.
    Draft,
    /// Submitted and awaiting approval.
    Pending,
    /// Approved; counts towards day classification.
    Approved,
    /// Rejected by an approver.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Draft => write!(f, "draft"),
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A leave request of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave.
    pub id: String,
    /// The user taking the leave.
    pub user_id: String,
    /// The kind of leave.
    pub leave_type_id: String,
    /// The current approval state.
    pub status: LeaveStatus,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Leave {
    /// Returns true if the leave has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Submits a draft leave for approval.
    ///
    /// Only the `Draft -> Pending` transition is performed here; approval and
    /// rejection belong to the approval workflow.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::{Leave, LeaveStatus};
    ///
    /// let mut leave = Leave {
    ///     id: "lv_001".to_string(),
    ///     user_id: "usr_001".to_string(),
    ///     leave_type_id: "lt_vacation".to_string(),
    ///     status: LeaveStatus::Draft,
    ///     description: None,
    /// };
    ///
    /// leave.submit().unwrap();
    /// assert_eq!(leave.status, LeaveStatus::Pending);
    /// assert!(leave.submit().is_err());
    /// ```
    pub fn submit(&mut self) -> EngineResult<()> {
        if self.status != LeaveStatus::Draft {
            return Err(EngineError::InvalidStatusTransition {
                entity: "leave",
                from: self.status.to_string(),
                to: LeaveStatus::Pending.to_string(),
            });
        }

        self.status = LeaveStatus::Pending;
        Ok(())
    }
}

/// A contiguous interval of leave within one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDate {
    /// Unique identifier for the leave date.
    pub id: String,
    /// The leave this interval belongs to.
    pub leave_id: String,
    /// The timesheet of the month the interval falls in.
    pub timesheet_id: String,
    /// Start of the interval.
    pub starts_at: NaiveDateTime,
    /// End of the interval; always after `starts_at`.
    pub ends_at: NaiveDateTime,
}

impl LeaveDate {
    /// Creates a leave date, enforcing that it ends after it starts.
    pub fn new(
        id: impl Into<String>,
        leave_id: impl Into<String>,
        timesheet_id: impl Into<String>,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> EngineResult<Self> {
        if ends_at <= starts_at {
            return Err(EngineError::InvalidLeaveDate { starts_at, ends_at });
        }

        Ok(Self {
            id: id.into(),
            leave_id: leave_id.into(),
            timesheet_id: timesheet_id.into(),
            starts_at,
            ends_at,
        })
    }

    /// Returns the length of the interval in hours, to the second.
    pub fn hours(&self) -> Decimal {
        seconds_to_hours((self.ends_at - self.starts_at).num_seconds())
    }

    /// Returns the hours of this interval falling on `day`.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::LeaveDate;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let leave_date = LeaveDate::new(
    ///     "ld_001",
    ///     "lv_001",
    ///     "ts_001",
    ///     NaiveDateTime::parse_from_str("2024-03-04 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2024-03-04 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// ).unwrap();
    ///
    /// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    /// assert_eq!(leave_date.hours_on(monday), Decimal::new(45, 1));
    /// assert_eq!(leave_date.hours_on(monday.succ_opt().unwrap()), Decimal::ZERO);
    /// ```
    pub fn hours_on(&self, day: NaiveDate) -> Decimal {
        let Some((day_start, day_end)) = day_bounds(day) else {
            return Decimal::ZERO;
        };

        let start = self.starts_at.max(day_start);
        let end = self.ends_at.min(day_end);

        if end <= start {
            return Decimal::ZERO;
        }

        seconds_to_hours((end - start).num_seconds())
    }

    /// Checks whether any part of the interval falls on `day`.
    pub fn overlaps_day(&self, day: NaiveDate) -> bool {
        match day_bounds(day) {
            Some((day_start, day_end)) => self.starts_at < day_end && self.ends_at > day_start,
            None => false,
        }
    }

    /// Returns every calendar day the interval touches, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.starts_at
            .date()
            .iter_days()
            .take_while(move |day| day.and_hms_opt(0, 0, 0).is_some_and(|start| start < self.ends_at))
    }
}

/// Returns midnight at the start of `day` and of the day after.
fn day_bounds(day: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = day.and_hms_opt(0, 0, 0)?;
    let end = day.succ_opt()?.and_hms_opt(0, 0, 0)?;
    Some((start, end))
}

fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

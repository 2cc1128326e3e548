//! Error types for the worktime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while classifying ranges or
//! expanding leave requests.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the worktime engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     from: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().to_string(),
///     until: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid range: 2024-03-01 comes before 2024-03-05");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end of a range comes before its start.
    #[error("Invalid range: {until} comes before {from}")]
    InvalidRange {
        /// The start of the rejected range.
        from: String,
        /// The end of the rejected range.
        until: String,
    },

    /// A full-day leave request did not cover a single eligible workday.
    #[error("No leave dates are available between {starts_at} and {ends_at}")]
    NoEligibleDays {
        /// The start of the requested leave.
        starts_at: NaiveDateTime,
        /// The end of the requested leave.
        ends_at: NaiveDateTime,
    },

    /// Two employment contracts of one user cover the same day.
    #[error("Employment contracts '{first}' and '{second}' of user '{user_id}' overlap")]
    OverlappingContracts {
        /// The user owning both contracts.
        user_id: String,
        /// The earlier of the two contracts.
        first: String,
        /// The later of the two contracts.
        second: String,
    },

    /// A record references another record that is not part of the record set.
    #[error("Missing {kind} record: {id}")]
    MissingRecord {
        /// The kind of record that was referenced (e.g. "company").
        kind: &'static str,
        /// The identifier that could not be resolved.
        id: String,
    },

    /// The requested user does not exist.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The unknown user identifier.
        user_id: String,
    },

    /// The requested leave type does not exist.
    #[error("Leave type not found: {leave_type_id}")]
    LeaveTypeNotFound {
        /// The unknown leave type identifier.
        leave_type_id: String,
    },

    /// A leave date does not end after it starts.
    #[error("Invalid leave date: {ends_at} does not come after {starts_at}")]
    InvalidLeaveDate {
        /// The start of the leave date.
        starts_at: NaiveDateTime,
        /// The end of the leave date.
        ends_at: NaiveDateTime,
    },

    /// A status change that the lifecycle does not allow.
    #[error("Cannot move {entity} from {from} to {to}")]
    InvalidStatusTransition {
        /// The kind of entity (e.g. "leave").
        entity: &'static str,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// Only active timesheets may be deleted.
    #[error("Timesheet '{timesheet_id}' is not active")]
    TimesheetNotActive {
        /// The timesheet that was not active.
        timesheet_id: String,
    },

    /// A timesheet's year and month do not name a calendar month.
    #[error("Timesheet '{timesheet_id}' has an invalid month: {year}-{month:02}")]
    InvalidTimesheetMonth {
        /// The timesheet carrying the month.
        timesheet_id: String,
        /// The year of the timesheet.
        year: i32,
        /// The month of the timesheet.
        month: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidRange`] from two dates.
    pub fn invalid_range(from: NaiveDate, until: NaiveDate) -> Self {
        EngineError::InvalidRange {
            from: from.to_string(),
            until: until.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

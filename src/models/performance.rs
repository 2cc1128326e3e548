//! Performance models: work actually done by a user on a day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours of activity booked against a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPerformance {
    /// Unique identifier for the performance.
    pub id: String,
    /// The timesheet the performance belongs to.
    pub timesheet_id: String,
    /// The day the work was performed.
    pub date: NaiveDate,
    /// The contract the work was booked against.
    pub contract_id: String,
    /// Hours worked.
    pub duration: Decimal,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A day spent on standby for a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandbyPerformance {
    /// Unique identifier for the performance.
    pub id: String,
    /// The timesheet the performance belongs to.
    pub timesheet_id: String,
    /// The day of standby.
    pub date: NaiveDate,
    /// The contract the standby was for.
    pub contract_id: String,
}

/// Work recorded by a user.
///
/// Standby carries no duration of its own and contributes zero hours.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{ActivityPerformance, Performance};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let performance = Performance::Activity(ActivityPerformance {
///     id: "pf_001".to_string(),
///     timesheet_id: "ts_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     contract_id: "ct_001".to_string(),
///     duration: Decimal::new(65, 1),
///     description: None,
/// });
/// assert_eq!(performance.duration(), Decimal::new(65, 1));
/// assert!(!performance.is_standby());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Performance {
    /// Hours of activity.
    Activity(ActivityPerformance),
    /// A standby day.
    Standby(StandbyPerformance),
}

impl Performance {
    /// Returns the performance identifier.
    pub fn id(&self) -> &str {
        match self {
            Performance::Activity(p) => &p.id,
            Performance::Standby(p) => &p.id,
        }
    }

    /// Returns the timesheet the performance is attached to.
    pub fn timesheet_id(&self) -> &str {
        match self {
            Performance::Activity(p) => &p.timesheet_id,
            Performance::Standby(p) => &p.timesheet_id,
        }
    }

    /// Returns the day of the performance.
    pub fn date(&self) -> NaiveDate {
        match self {
            Performance::Activity(p) => p.date,
            Performance::Standby(p) => p.date,
        }
    }

    /// Returns the contract the performance was booked against.
    pub fn contract_id(&self) -> &str {
        match self {
            Performance::Activity(p) => &p.contract_id,
            Performance::Standby(p) => &p.contract_id,
        }
    }

    /// Returns the performed hours.
    pub fn duration(&self) -> Decimal {
        match self {
            Performance::Activity(p) => p.duration,
            Performance::Standby(_) => Decimal::ZERO,
        }
    }

    /// Returns true for standby performances.
    pub fn is_standby(&self) -> bool {
        matches!(self, Performance::Standby(_))
    }
}

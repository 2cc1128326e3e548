//! Range info models.
//!
//! This module contains the [`RangeInfo`] type and its associated structures
//! capturing what was expected from and performed by one user over a date
//! range, optionally broken down per day and per contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Performance;

/// Classification of a single day for one user.
///
/// # Example
///
/// ```
/// use worktime_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::Sickness.to_string(), "sickness");
/// assert!(DayStatus::Leave.is_absence());
/// assert!(!DayStatus::Holiday.is_absence());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Not employed, or the work schedule expects no hours.
    NoWork,
    /// A holiday in the country of the employing company.
    Holiday,
    /// Approved leave.
    Leave,
    /// Approved leave of a sickness type.
    Sickness,
    /// A regular working day.
    Workday,
}

impl DayStatus {
    /// Returns true for days covered by approved leave of any kind.
    pub fn is_absence(self) -> bool {
        matches!(self, DayStatus::Leave | DayStatus::Sickness)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::NoWork => write!(f, "no_work"),
            DayStatus::Holiday => write!(f, "holiday"),
            DayStatus::Leave => write!(f, "leave"),
            DayStatus::Sickness => write!(f, "sickness"),
            DayStatus::Workday => write!(f, "workday"),
        }
    }
}

/// Which optional views to include in a [`RangeInfo`].
///
/// `detailed` implies `daily`: performances are listed inside day details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeOptions {
    /// Include one [`DayDetail`] per day.
    #[serde(default)]
    pub daily: bool,
    /// Include the performances of each day in its detail.
    #[serde(default)]
    pub detailed: bool,
    /// Include per-contract duration totals.
    #[serde(default)]
    pub summary: bool,
}

impl RangeOptions {
    /// Options including every view.
    pub fn all() -> Self {
        Self {
            daily: true,
            detailed: true,
            summary: true,
        }
    }

    /// Returns true if day details should be produced.
    pub fn wants_days(&self) -> bool {
        self.daily || self.detailed
    }
}

/// The classification and hours of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDetail {
    /// The day.
    pub date: NaiveDate,
    /// The classification of the day.
    pub status: DayStatus,
    /// Hours expected on the day.
    pub expected_hours: Decimal,
    /// Hours performed on the day.
    pub performed_hours: Decimal,
    /// Hours of approved leave falling on the day.
    pub leave_hours: Decimal,
    /// The performances of the day (only with `detailed`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performances: Vec<Performance>,
}

/// Total hours performed against one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    /// The contract.
    pub contract_id: String,
    /// Sum of activity hours.
    pub duration: Decimal,
    /// Number of standby performances.
    pub standby_count: u32,
}

/// A non-fatal anomaly found while building a [`RangeInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// Warning code for a user without any employment contract in the range.
pub const UNRESOLVED_USER: &str = "UNRESOLVED_USER";

/// Warning code for a user whose employment contracts overlap.
pub const OVERLAPPING_CONTRACTS: &str = "OVERLAPPING_CONTRACTS";

/// Aggregated hours for one user over a date range.
///
/// # Example
///
/// ```
/// use worktime_engine::models::RangeInfo;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let info = RangeInfo::empty(
///     "usr_001",
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// assert_eq!(info.expected_hours, Decimal::ZERO);
/// assert!(info.details.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeInfo {
    /// The user the totals belong to.
    pub user_id: String,
    /// First day of the range (inclusive).
    pub from: NaiveDate,
    /// Last day of the range (inclusive).
    pub until: NaiveDate,
    /// Sum of the expected hours of every day.
    pub expected_hours: Decimal,
    /// Sum of all performed hours.
    pub performed_hours: Decimal,
    /// Scheduled hours that fell on holidays and were not expected.
    pub holiday_hours: Decimal,
    /// Hours of approved non-sickness leave on leave days.
    pub leave_hours: Decimal,
    /// Hours of approved sickness leave on sickness days.
    pub sickness_hours: Decimal,
    /// Expected hours not yet accounted for by work or leave.
    pub remaining_hours: Decimal,
    /// Hours of work and leave beyond what was expected.
    pub overtime_hours: Decimal,
    /// One entry per day, in order (with `daily` or `detailed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<DayDetail>>,
    /// Per-contract totals, ordered by contract id (with `summary`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<ContractSummary>>,
    /// Recovered anomalies.
    #[serde(default)]
    pub warnings: Vec<RangeWarning>,
}

impl RangeInfo {
    /// Creates a range info with all totals at zero and no optional views.
    pub fn empty(user_id: impl Into<String>, from: NaiveDate, until: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            from,
            until,
            expected_hours: Decimal::ZERO,
            performed_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            sickness_hours: Decimal::ZERO,
            remaining_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            details: None,
            summary: None,
            warnings: vec![],
        }
    }

    /// Returns the detail of one day, if day details were requested.
    pub fn day(&self, date: NaiveDate) -> Option<&DayDetail> {
        self.details
            .as_ref()?
            .iter()
            .find(|detail| detail.date == date)
    }

    /// Returns the summed duration of one contract, if a summary was requested.
    pub fn contract_duration(&self, contract_id: &str) -> Option<Decimal> {
        self.summary
            .as_ref()?
            .iter()
            .find(|entry| entry.contract_id == contract_id)
            .map(|entry| entry.duration)
    }
}

//! Employment models: companies, work schedules and employment contracts.
//!
//! An [`EmploymentContract`] ties a user to a [`Company`] (and thus the
//! country whose holiday calendar applies) and to a [`WorkSchedule`] giving
//! the expected hours for each weekday.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: String,
    /// The company name.
    pub name: String,
    /// Country code used to select the holiday calendar (e.g., "BE").
    pub country: String,
}

/// Expected working hours for each day of the week.
///
/// # Example
///
/// ```
/// use worktime_engine::models::WorkSchedule;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let schedule = WorkSchedule::weekdays("ws_fulltime", Decimal::new(8, 0));
/// assert_eq!(schedule.hours_for(Weekday::Mon), Decimal::new(8, 0));
/// assert_eq!(schedule.hours_for(Weekday::Sun), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Unique identifier for the work schedule.
    pub id: String,
    /// Hours expected on Monday.
    #[serde(default)]
    pub monday: Decimal,
    /// Hours expected on Tuesday.
    #[serde(default)]
    pub tuesday: Decimal,
    /// Hours expected on Wednesday.
    #[serde(default)]
    pub wednesday: Decimal,
    /// Hours expected on Thursday.
    #[serde(default)]
    pub thursday: Decimal,
    /// Hours expected on Friday.
    #[serde(default)]
    pub friday: Decimal,
    /// Hours expected on Saturday.
    #[serde(default)]
    pub saturday: Decimal,
    /// Hours expected on Sunday.
    #[serde(default)]
    pub sunday: Decimal,
}

impl WorkSchedule {
    /// Creates a schedule with the same hours Monday through Friday and none in the weekend.
    pub fn weekdays(id: impl Into<String>, hours: Decimal) -> Self {
        Self {
            id: id.into(),
            monday: hours,
            tuesday: hours,
            wednesday: hours,
            thursday: hours,
            friday: hours,
            saturday: Decimal::ZERO,
            sunday: Decimal::ZERO,
        }
    }

    /// Returns the expected hours for the given weekday.
    pub fn hours_for(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Returns the total expected hours over a full week.
    pub fn weekly_hours(&self) -> Decimal {
        self.monday
            + self.tuesday
            + self.wednesday
            + self.thursday
            + self.friday
            + self.saturday
            + self.sunday
    }
}

/// Links a user to a company and a work schedule for a period of time.
///
/// A contract without `ended_at` is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentContract {
    /// Unique identifier for the employment contract.
    pub id: String,
    /// The employed user.
    pub user_id: String,
    /// The employing company.
    pub company_id: String,
    /// The work schedule in force under this contract.
    pub work_schedule_id: String,
    /// First day covered by the contract (inclusive).
    pub started_at: NaiveDate,
    /// Last day covered by the contract (inclusive), if any.
    #[serde(default)]
    pub ended_at: Option<NaiveDate>,
}

impl EmploymentContract {
    /// Checks whether the contract is in force on the given day.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::EmploymentContract;
    /// use chrono::NaiveDate;
    ///
    /// let contract = EmploymentContract {
    ///     id: "ec_001".to_string(),
    ///     user_id: "usr_001".to_string(),
    ///     company_id: "co_001".to_string(),
    ///     work_schedule_id: "ws_001".to_string(),
    ///     started_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     ended_at: Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
    /// };
    ///
    /// assert!(contract.covers(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
    /// assert!(!contract.covers(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    /// ```
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.started_at <= day && self.ended_at.is_none_or(|ended_at| ended_at >= day)
    }

    /// Checks whether two contracts share at least one day.
    pub fn overlaps(&self, other: &EmploymentContract) -> bool {
        let self_before_other = self.ended_at.is_some_and(|end| end < other.started_at);
        let other_before_self = other.ended_at.is_some_and(|end| end < self.started_at);
        !(self_before_other || other_before_self)
    }
}

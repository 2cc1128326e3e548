//! Holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a public holiday in one country.
///
/// Several holidays may share a country and date; the presence of any one of
/// them is enough to mark the day as a holiday.
///
/// # Example
///
/// ```
/// use worktime_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     id: "hol_001".to_string(),
///     name: "Christmas".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
///     country: "BE".to_string(),
/// };
/// assert!(holiday.applies_to("BE", NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// assert!(!holiday.applies_to("NL", NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday.
    pub id: String,
    /// The name of the holiday (e.g., "Christmas").
    pub name: String,
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Country code the holiday applies to.
    pub country: String,
}

impl Holiday {
    /// Checks whether this holiday falls on `day` in `country`.
    pub fn applies_to(&self, country: &str, day: NaiveDate) -> bool {
        self.date == day && self.country == country
    }
}

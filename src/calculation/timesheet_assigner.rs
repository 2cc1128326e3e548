//! Timesheet assignment for leave dates.

use chrono::Datelike;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Timesheet, TimesheetStatus};

use super::leave_expander::LeavePair;

/// Maps leave pairs of one user to their monthly timesheet.
///
/// Pairs are expected in chronological order. The timesheet of the last
/// pair is kept and reused while consecutive pairs stay in the same month,
/// so a lookup (or creation) only happens when the month changes.
#[derive(Debug, Clone)]
pub struct TimesheetAssigner<'r> {
    user_id: String,
    existing: &'r [&'r Timesheet],
    current: Option<Timesheet>,
    created: Vec<Timesheet>,
    lookups: usize,
}

impl<'r> TimesheetAssigner<'r> {
    /// Creates an assigner over the existing timesheets of a user.
    pub fn new(user_id: impl Into<String>, existing: &'r [&'r Timesheet]) -> Self {
        Self {
            user_id: user_id.into(),
            existing,
            current: None,
            created: Vec::new(),
            lookups: 0,
        }
    }

    /// Returns the timesheet for the month `pair` starts in.
    ///
    /// A missing timesheet is created with status `Active` and remembered,
    /// so later pairs of the same month find it again.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::calculation::{LeavePair, TimesheetAssigner};
    /// use worktime_engine::models::TimesheetStatus;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    /// let pair = LeavePair {
    ///     starts_at: day.and_hms_opt(8, 0, 0).unwrap(),
    ///     ends_at: day.and_hms_opt(16, 0, 0).unwrap(),
    /// };
    ///
    /// let mut assigner = TimesheetAssigner::new("usr_001", &[]);
    /// let timesheet = assigner.assign(&pair);
    /// assert_eq!((timesheet.year, timesheet.month), (2024, 3));
    /// assert_eq!(timesheet.status, TimesheetStatus::Active);
    /// assert_eq!(assigner.created().len(), 1);
    /// ```
    pub fn assign(&mut self, pair: &LeavePair) -> &Timesheet {
        let (year, month) = (pair.starts_at.year(), pair.starts_at.month());

        let timesheet = match self.current.take() {
            Some(current) if current.is_for(year, month) => current,
            _ => self.lookup_or_create(year, month),
        };

        self.current.insert(timesheet)
    }

    fn lookup_or_create(&mut self, year: i32, month: u32) -> Timesheet {
        self.lookups += 1;

        let found = self
            .existing
            .iter()
            .copied()
            .chain(self.created.iter())
            .find(|timesheet| timesheet.is_for(year, month));

        if let Some(timesheet) = found {
            debug!(timesheet_id = %timesheet.id, year, month, "Reusing timesheet");
            return timesheet.clone();
        }

        let timesheet = Timesheet {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id.clone(),
            year,
            month,
            status: TimesheetStatus::Active,
        };
        info!(
            timesheet_id = %timesheet.id,
            user_id = %self.user_id,
            year,
            month,
            "Created timesheet"
        );
        self.created.push(timesheet.clone());
        timesheet
    }

    /// Returns the timesheets created so far.
    pub fn created(&self) -> &[Timesheet] {
        &self.created
    }

    /// Consumes the assigner, returning the timesheets it created.
    pub fn into_created(self) -> Vec<Timesheet> {
        self.created
    }

    /// Returns how many times the assigner had to search for a timesheet.
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn pair(date_str: &str) -> LeavePair {
        LeavePair {
            starts_at: make_datetime(date_str, "08:00:00"),
            ends_at: make_datetime(date_str, "16:00:00"),
        }
    }

    fn timesheet(id: &str, year: i32, month: u32) -> Timesheet {
        Timesheet {
            id: id.to_string(),
            user_id: "usr_001".to_string(),
            year,
            month,
            status: TimesheetStatus::Pending,
        }
    }

    // ==========================================================================
    // TA-001: Existing timesheet is reused
    // ==========================================================================
    #[test]
    fn test_ta_001_existing_timesheet_is_reused() {
        let march = timesheet("ts_2024_03", 2024, 3);
        let existing = [&march];
        let mut assigner = TimesheetAssigner::new("usr_001", &existing);

        let assigned = assigner.assign(&pair("2024-03-04")).clone();

        assert_eq!(assigned, march);
        assert!(assigner.created().is_empty());
    }

    // ==========================================================================
    // TA-002: Consecutive pairs in one month share a single lookup
    // ==========================================================================
    #[test]
    fn test_ta_002_same_month_reuses_current() {
        let mut assigner = TimesheetAssigner::new("usr_001", &[]);

        let ids: Vec<String> = ["2024-03-04", "2024-03-05", "2024-03-06"]
            .iter()
            .map(|d| assigner.assign(&pair(d)).id.clone())
            .collect();

        assert!(ids.iter().all(|id| *id == ids[0]));
        assert_eq!(assigner.lookups(), 1);
        assert_eq!(assigner.created().len(), 1);
    }

    // ==========================================================================
    // TA-003: Month change switches timesheet
    // ==========================================================================
    #[test]
    fn test_ta_003_month_change_switches_timesheet() {
        let march = timesheet("ts_2024_03", 2024, 3);
        let existing = [&march];
        let mut assigner = TimesheetAssigner::new("usr_001", &existing);

        let first = assigner.assign(&pair("2024-03-29")).id.clone();
        let second = assigner.assign(&pair("2024-04-01")).clone();

        assert_eq!(first, "ts_2024_03");
        assert_ne!(second.id, "ts_2024_03");
        assert_eq!((second.year, second.month), (2024, 4));
        assert_eq!(second.status, TimesheetStatus::Active);
        assert_eq!(second.user_id, "usr_001");
        assert_eq!(assigner.lookups(), 2);
    }

    // ==========================================================================
    // TA-004: Same month in another year is a different timesheet
    // ==========================================================================
    #[test]
    fn test_ta_004_year_is_part_of_the_key() {
        let mut assigner = TimesheetAssigner::new("usr_001", &[]);

        let first = assigner.assign(&pair("2024-12-31")).id.clone();
        let second = assigner.assign(&pair("2025-12-01")).id.clone();

        assert_ne!(first, second);
        assert_eq!(assigner.into_created().len(), 2);
    }

    // ==========================================================================
    // TA-005: Returning to a month finds the timesheet created earlier
    // ==========================================================================
    #[test]
    fn test_ta_005_created_timesheet_is_found_again() {
        let mut assigner = TimesheetAssigner::new("usr_001", &[]);

        let march = assigner.assign(&pair("2024-03-29")).id.clone();
        assigner.assign(&pair("2024-04-01"));
        let march_again = assigner.assign(&pair("2024-03-30")).id.clone();

        assert_eq!(march, march_again);
        assert_eq!(assigner.created().len(), 2);
        assert_eq!(
            assigner.created()[0].date_range().unwrap().0,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}

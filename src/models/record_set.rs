//! The record set handed to the engine.
//!
//! The persistence layer fetches and filters records before calling the
//! engine; a [`RecordSet`] is that already-materialized snapshot.

use serde::{Deserialize, Serialize};

use super::{
    Company, Contract, EmploymentContract, Holiday, Leave, LeaveDate, LeaveType, Performance,
    Timesheet, User, WorkSchedule,
};

/// A snapshot of every record the engine may need for one call.
///
/// Records referenced by id (companies, work schedules, leave types, leaves,
/// timesheets) must be present; see
/// [`RecordIndex::build`](crate::calculation::RecordIndex::build).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Companies.
    #[serde(default)]
    pub companies: Vec<Company>,
    /// Work schedules.
    #[serde(default)]
    pub work_schedules: Vec<WorkSchedule>,
    /// Employment contracts.
    #[serde(default)]
    pub employment_contracts: Vec<EmploymentContract>,
    /// Holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Leave types.
    #[serde(default)]
    pub leave_types: Vec<LeaveType>,
    /// Leaves.
    #[serde(default)]
    pub leaves: Vec<Leave>,
    /// Leave dates.
    #[serde(default)]
    pub leave_dates: Vec<LeaveDate>,
    /// Timesheets.
    #[serde(default)]
    pub timesheets: Vec<Timesheet>,
    /// Customer contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Performances.
    #[serde(default)]
    pub performances: Vec<Performance>,
}

//! Reports built on top of the calculation core.
//!
//! This module contains the availability of active users over a range, the
//! yearly leave overview of a user and the per-timesheet overviews.

mod availability;
mod leave_overview;
mod timesheet_overview;

pub use availability::{RangeAvailability, UserAvailability, range_availability};
pub use leave_overview::{MonthlyLeaveOverview, user_leave_overview};
pub use timesheet_overview::{
    TimesheetContractOverview, TimesheetOverview, timesheet_contract_overview, timesheet_overview,
};

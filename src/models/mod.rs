//! Core data models for the worktime engine.
//!
//! This module contains the domain records the engine consumes and the
//! result types it produces.

mod contract;
mod employment;
mod holiday;
mod leave;
mod performance;
mod range_info;
mod record_set;
mod timesheet;
mod user;

pub use contract::{ConsultancyContract, Contract, ProjectContract, SupportContract};
pub use employment::{Company, EmploymentContract, WorkSchedule};
pub use holiday::Holiday;
pub use leave::{Leave, LeaveDate, LeaveStatus, LeaveType};
pub use performance::{ActivityPerformance, Performance, StandbyPerformance};
pub use range_info::{
    ContractSummary, DayDetail, DayStatus, OVERLAPPING_CONTRACTS, RangeInfo, RangeOptions,
    RangeWarning, UNRESOLVED_USER,
};
pub use record_set::RecordSet;
pub use timesheet::{Timesheet, TimesheetStatus};
pub use user::User;

//! Calculation logic for the worktime engine.
//!
//! This module contains the record index, employment contract resolution,
//! day classification, range aggregation of expected and performed hours,
//! leave request expansion and timesheet assignment for leave dates.

mod day_classifier;
mod leave_expander;
mod range_aggregator;
mod record_index;
mod temporal_resolver;
mod timesheet_assigner;

pub use day_classifier::{DayClassification, classify_day};
pub use leave_expander::{
    LeavePair, LeaveRequest, LeaveRequestOutcome, expand_leave, request_leave, working_day_pair,
};
pub use range_aggregator::{aggregate, aggregate_user, days_in_range, ensure_range, get_range_info};
pub use record_index::{LeaveEntry, RecordIndex, ResolvedContract, validate_contracts};
pub use temporal_resolver::{ContractResolver, resolve_contract};
pub use timesheet_assigner::TimesheetAssigner;

//! Worktime engine for employee time tracking
//!
//! This crate classifies calendar days against employment contracts, work
//! schedules, holidays and leave, aggregates expected and performed hours
//! over date ranges, and expands leave requests into per-day leave dates
//! attached to monthly timesheets.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;

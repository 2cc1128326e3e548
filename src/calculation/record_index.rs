//! Lookup index over a [`RecordSet`].
//!
//! The index is built once per engine call. It resolves every id reference
//! in the record set, checks the one-contract-per-day invariant and groups
//! time-bounded records by user and day so that the per-day loops of the
//! aggregator and the leave expander only touch what they need.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{EngineConfig, SicknessRegistry};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Company, Contract, EmploymentContract, Holiday, Leave, LeaveDate, LeaveType, Performance,
    RecordSet, Timesheet, User, WorkSchedule,
};

/// An employment contract together with the records it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedContract<'a> {
    /// The employment contract.
    pub contract: &'a EmploymentContract,
    /// The employing company.
    pub company: &'a Company,
    /// The work schedule of the contract.
    pub work_schedule: &'a WorkSchedule,
}

impl ResolvedContract<'_> {
    /// Returns the country whose holidays apply.
    pub fn country(&self) -> &str {
        &self.company.country
    }

    /// Returns the scheduled hours for a weekday.
    pub fn hours_for(&self, weekday: Weekday) -> Decimal {
        self.work_schedule.hours_for(weekday)
    }
}

/// A leave date together with its leave and sickness flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveEntry<'a> {
    /// The leave date.
    pub leave_date: &'a LeaveDate,
    /// The leave the date belongs to.
    pub leave: &'a Leave,
    /// Whether the leave type counts as sickness.
    pub is_sickness: bool,
}

impl LeaveEntry<'_> {
    /// Returns true if the leave has been approved.
    pub fn is_approved(&self) -> bool {
        self.leave.is_approved()
    }
}

/// Indexed, validated view of a [`RecordSet`].
#[derive(Debug)]
pub struct RecordIndex<'a> {
    config: &'a EngineConfig,
    sickness: SicknessRegistry,
    users: Vec<&'a User>,
    users_by_id: HashMap<&'a str, &'a User>,
    leave_types: Vec<&'a LeaveType>,
    leave_types_by_id: HashMap<&'a str, &'a LeaveType>,
    contracts_by_user: HashMap<&'a str, Vec<ResolvedContract<'a>>>,
    contract_conflicts: HashMap<&'a str, (&'a str, &'a str)>,
    holidays_by_date: HashMap<NaiveDate, Vec<&'a Holiday>>,
    leave_entries_by_user: HashMap<&'a str, Vec<LeaveEntry<'a>>>,
    leave_entries_by_day: HashMap<&'a str, HashMap<NaiveDate, Vec<LeaveEntry<'a>>>>,
    timesheets_by_user: HashMap<&'a str, Vec<&'a Timesheet>>,
    performances_by_day: HashMap<&'a str, HashMap<NaiveDate, Vec<&'a Performance>>>,
    contracts_by_id: HashMap<&'a str, &'a Contract>,
}

impl<'a> RecordIndex<'a> {
    /// Builds the index.
    ///
    /// # Errors
    ///
    /// - `MissingRecord` when a record references a company, work schedule,
    ///   leave, leave type or timesheet that is not in the record set
    ///
    /// Overlapping employment contracts do not fail the build. The user's
    /// contracts are withheld and the conflict is reported per user through
    /// [`RecordIndex::ensure_contracts`].
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::calculation::RecordIndex;
    /// use worktime_engine::config::EngineConfig;
    /// use worktime_engine::models::RecordSet;
    ///
    /// let records = RecordSet::default();
    /// let config = EngineConfig::default();
    /// let index = RecordIndex::build(&records, &config).unwrap();
    /// assert!(index.user("usr_001").is_none());
    /// ```
    pub fn build(records: &'a RecordSet, config: &'a EngineConfig) -> EngineResult<Self> {
        let users_by_id: HashMap<&str, &User> =
            records.users.iter().map(|u| (u.id.as_str(), u)).collect();
        let companies: HashMap<&str, &Company> =
            records.companies.iter().map(|c| (c.id.as_str(), c)).collect();
        let schedules: HashMap<&str, &WorkSchedule> = records
            .work_schedules
            .iter()
            .map(|s| (s.id.as_str(), s))
            .collect();
        let leave_types_by_id: HashMap<&str, &LeaveType> = records
            .leave_types
            .iter()
            .map(|t| (t.id.as_str(), t))
            .collect();
        let leaves: HashMap<&str, &Leave> =
            records.leaves.iter().map(|l| (l.id.as_str(), l)).collect();
        let timesheets: HashMap<&str, &Timesheet> =
            records.timesheets.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut contracts_by_user: HashMap<&str, Vec<ResolvedContract>> = HashMap::new();
        for contract in &records.employment_contracts {
            let company = *companies
                .get(contract.company_id.as_str())
                .ok_or_else(|| missing("company", &contract.company_id))?;
            let work_schedule = *schedules
                .get(contract.work_schedule_id.as_str())
                .ok_or_else(|| missing("work schedule", &contract.work_schedule_id))?;

            contracts_by_user
                .entry(contract.user_id.as_str())
                .or_default()
                .push(ResolvedContract {
                    contract,
                    company,
                    work_schedule,
                });
        }
        let mut contract_conflicts: HashMap<&str, (&str, &str)> = HashMap::new();
        for (user_id, contracts) in contracts_by_user.iter_mut() {
            contracts.sort_by(|a, b| {
                a.contract
                    .started_at
                    .cmp(&b.contract.started_at)
                    .then_with(|| a.contract.id.cmp(&b.contract.id))
            });
            if let Some((first, second)) = find_overlap(contracts) {
                warn!(
                    user_id = %user_id,
                    first = %first.id,
                    second = %second.id,
                    "Overlapping employment contracts"
                );
                contract_conflicts.insert(*user_id, (first.id.as_str(), second.id.as_str()));
            }
        }
        for user_id in contract_conflicts.keys() {
            contracts_by_user.remove(user_id);
        }

        let mut holidays_by_date: HashMap<NaiveDate, Vec<&Holiday>> = HashMap::new();
        for holiday in &records.holidays {
            holidays_by_date.entry(holiday.date).or_default().push(holiday);
        }

        let sickness = SicknessRegistry::from_leave_types(&records.leave_types, config);

        let mut leave_entries_by_user: HashMap<&str, Vec<LeaveEntry>> = HashMap::new();
        let mut leave_entries_by_day: HashMap<&str, HashMap<NaiveDate, Vec<LeaveEntry>>> =
            HashMap::new();
        for leave_date in &records.leave_dates {
            let leave = *leaves
                .get(leave_date.leave_id.as_str())
                .ok_or_else(|| missing("leave", &leave_date.leave_id))?;
            if !leave_types_by_id.contains_key(leave.leave_type_id.as_str()) {
                return Err(missing("leave type", &leave.leave_type_id));
            }

            let entry = LeaveEntry {
                leave_date,
                leave,
                is_sickness: sickness.is_sickness(&leave.leave_type_id),
            };

            leave_entries_by_user
                .entry(leave.user_id.as_str())
                .or_default()
                .push(entry);
            for day in leave_date.days() {
                leave_entries_by_day
                    .entry(leave.user_id.as_str())
                    .or_default()
                    .entry(day)
                    .or_default()
                    .push(entry);
            }
        }
        for entries in leave_entries_by_user.values_mut() {
            entries.sort_by_key(|entry| entry.leave_date.starts_at);
        }

        let mut timesheets_by_user: HashMap<&str, Vec<&Timesheet>> = HashMap::new();
        for timesheet in &records.timesheets {
            timesheets_by_user
                .entry(timesheet.user_id.as_str())
                .or_default()
                .push(timesheet);
        }

        let mut performances_by_day: HashMap<&str, HashMap<NaiveDate, Vec<&Performance>>> =
            HashMap::new();
        for performance in &records.performances {
            let timesheet = *timesheets
                .get(performance.timesheet_id())
                .ok_or_else(|| missing("timesheet", performance.timesheet_id()))?;
            performances_by_day
                .entry(timesheet.user_id.as_str())
                .or_default()
                .entry(performance.date())
                .or_default()
                .push(performance);
        }

        let contracts_by_id = records.contracts.iter().map(|c| (c.id(), c)).collect();

        Ok(Self {
            config,
            sickness,
            users: records.users.iter().collect(),
            users_by_id,
            leave_types: records.leave_types.iter().collect(),
            leave_types_by_id,
            contracts_by_user,
            contract_conflicts,
            holidays_by_date,
            leave_entries_by_user,
            leave_entries_by_day,
            timesheets_by_user,
            performances_by_day,
            contracts_by_id,
        })
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// Returns the resolved sickness flags.
    pub fn sickness(&self) -> &SicknessRegistry {
        &self.sickness
    }

    /// Returns all users in record set order.
    pub fn users(&self) -> &[&'a User] {
        &self.users
    }

    /// Looks up a user.
    pub fn user(&self, user_id: &str) -> Option<&'a User> {
        self.users_by_id.get(user_id).copied()
    }

    /// Returns all leave types in record set order.
    pub fn leave_types(&self) -> &[&'a LeaveType] {
        &self.leave_types
    }

    /// Looks up a leave type.
    pub fn leave_type(&self, leave_type_id: &str) -> Option<&'a LeaveType> {
        self.leave_types_by_id.get(leave_type_id).copied()
    }

    /// Fails with `OverlappingContracts` if two employment contracts of the
    /// user cover the same day.
    pub fn ensure_contracts(&self, user_id: &str) -> EngineResult<()> {
        match self.contract_conflicts.get(user_id) {
            Some((first, second)) => Err(EngineError::OverlappingContracts {
                user_id: user_id.to_string(),
                first: first.to_string(),
                second: second.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the employment contracts of a user, ordered by start date.
    ///
    /// Users with overlapping contracts get none.
    pub fn contracts_for(&self, user_id: &str) -> &[ResolvedContract<'a>] {
        self.contracts_by_user
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the holidays of every country on a day.
    pub fn holidays_on(&self, day: NaiveDate) -> &[&'a Holiday] {
        self.holidays_by_date
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the leave dates of a user touching a day, whatever their status.
    pub fn leave_entries_on(&self, user_id: &str, day: NaiveDate) -> &[LeaveEntry<'a>] {
        self.leave_entries_by_day
            .get(user_id)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns all leave dates of a user ordered by start, whatever their status.
    pub fn leave_entries_for(&self, user_id: &str) -> &[LeaveEntry<'a>] {
        self.leave_entries_by_user
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the existing timesheets of a user.
    pub fn timesheets_for(&self, user_id: &str) -> &[&'a Timesheet] {
        self.timesheets_by_user
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the performances of a user on a day.
    pub fn performances_on(&self, user_id: &str, day: NaiveDate) -> &[&'a Performance] {
        self.performances_by_day
            .get(user_id)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up a customer contract.
    pub fn contract(&self, contract_id: &str) -> Option<&'a Contract> {
        self.contracts_by_id.get(contract_id).copied()
    }
}

/// Checks that no two contracts of a user cover the same day.
///
/// `contracts` must be ordered by start date; with that ordering, comparing
/// neighbours is enough.
pub fn validate_contracts(user_id: &str, contracts: &[ResolvedContract<'_>]) -> EngineResult<()> {
    match find_overlap(contracts) {
        Some((first, second)) => Err(EngineError::OverlappingContracts {
            user_id: user_id.to_string(),
            first: first.id.clone(),
            second: second.id.clone(),
        }),
        None => Ok(()),
    }
}

fn find_overlap<'a>(
    contracts: &[ResolvedContract<'a>],
) -> Option<(&'a EmploymentContract, &'a EmploymentContract)> {
    contracts
        .windows(2)
        .map(|pair| (pair[0].contract, pair[1].contract))
        .find(|(first, second)| first.overlaps(second))
}

fn missing(kind: &'static str, id: &str) -> EngineError {
    EngineError::MissingRecord {
        kind,
        id: id.to_string(),
    }
}

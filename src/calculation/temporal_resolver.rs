//! Employment contract resolution per day.
//!
//! For a user and a day there is at most one employment contract in force.
//! The resolver finds it, remembering the last match so that walking a range
//! day by day only searches again when the contract runs out.

use chrono::NaiveDate;
use tracing::debug;

use super::record_index::{RecordIndex, ResolvedContract};

/// Picks the employment contract covering a day.
///
/// Among the contracts (ordered by start date) the first one covering `day`
/// wins. Returns `None` when the user is not employed that day.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::{RecordIndex, resolve_contract};
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::RecordSet;
/// use chrono::NaiveDate;
///
/// let records = RecordSet::default();
/// let config = EngineConfig::default();
/// let index = RecordIndex::build(&records, &config).unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert!(resolve_contract(index.contracts_for("usr_001"), day).is_none());
/// ```
pub fn resolve_contract<'a>(
    contracts: &[ResolvedContract<'a>],
    day: NaiveDate,
) -> Option<ResolvedContract<'a>> {
    contracts
        .iter()
        .find(|resolved| resolved.contract.covers(day))
        .copied()
}

/// Stateful resolver for walking the days of one user in order.
#[derive(Debug, Clone)]
pub struct ContractResolver<'r, 'a> {
    contracts: &'r [ResolvedContract<'a>],
    current: Option<ResolvedContract<'a>>,
}

impl<'r, 'a> ContractResolver<'r, 'a> {
    /// Creates a resolver over contracts ordered by start date.
    pub fn new(contracts: &'r [ResolvedContract<'a>]) -> Self {
        Self {
            contracts,
            current: None,
        }
    }

    /// Creates a resolver over the contracts of a user.
    pub fn for_user(index: &'r RecordIndex<'a>, user_id: &str) -> Self {
        Self::new(index.contracts_for(user_id))
    }

    /// Returns true if the user has no contract at all.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Resolves the contract for `day`.
    ///
    /// The previously resolved contract is reused as long as it still covers
    /// the day.
    pub fn resolve(&mut self, day: NaiveDate) -> Option<ResolvedContract<'a>> {
        let still_covered = self
            .current
            .is_some_and(|resolved| resolved.contract.covers(day));

        if !still_covered {
            self.current = resolve_contract(self.contracts, day);
            debug!(
                day = %day,
                contract_id = self.current.map(|resolved| resolved.contract.id.as_str()),
                "Resolved employment contract"
            );
        }

        self.current
    }
}

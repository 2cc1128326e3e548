//! Customer contract models.
//!
//! Contracts are what performances are booked against. The engine only
//! uses their identity to group performed hours.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed-scope project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The contract name.
    pub name: String,
    /// First day of the project.
    #[serde(default)]
    pub starts_at: Option<NaiveDate>,
    /// Last day of the project.
    #[serde(default)]
    pub ends_at: Option<NaiveDate>,
}

/// A consultancy engagement with an hour budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultancyContract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The contract name.
    pub name: String,
    /// Budgeted hours, if capped.
    #[serde(default)]
    pub duration: Option<Decimal>,
}

/// An ongoing support agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportContract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The contract name.
    pub name: String,
    /// Agreed rate per day, if any.
    #[serde(default)]
    pub day_rate: Option<Decimal>,
}

/// A contract performances can be booked against.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{Contract, SupportContract};
///
/// let contract = Contract::Support(SupportContract {
///     id: "ct_support".to_string(),
///     name: "Helpdesk".to_string(),
///     day_rate: None,
/// });
/// assert_eq!(contract.id(), "ct_support");
/// assert_eq!(contract.kind(), "support");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Contract {
    /// A project contract.
    Project(ProjectContract),
    /// A consultancy contract.
    Consultancy(ConsultancyContract),
    /// A support contract.
    Support(SupportContract),
}

impl Contract {
    /// Returns the contract identifier.
    pub fn id(&self) -> &str {
        match self {
            Contract::Project(c) => &c.id,
            Contract::Consultancy(c) => &c.id,
            Contract::Support(c) => &c.id,
        }
    }

    /// Returns the contract name.
    pub fn name(&self) -> &str {
        match self {
            Contract::Project(c) => &c.name,
            Contract::Consultancy(c) => &c.name,
            Contract::Support(c) => &c.name,
        }
    }

    /// Returns the variant tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Contract::Project(_) => "project",
            Contract::Consultancy(_) => "consultancy",
            Contract::Support(_) => "support",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_deserialization() {
        let json = r#"[
            {"type": "project", "id": "ct_1", "name": "Website", "starts_at": "2024-01-01"},
            {"type": "consultancy", "id": "ct_2", "name": "Audit", "duration": "120"},
            {"type": "support", "id": "ct_3", "name": "Helpdesk"}
        ]"#;

        let contracts: Vec<Contract> = serde_json::from_str(json).unwrap();

        assert_eq!(contracts[0].kind(), "project");
        assert_eq!(contracts[1].kind(), "consultancy");
        assert_eq!(contracts[2].kind(), "support");
        assert_eq!(contracts[1].name(), "Audit");
        assert_eq!(contracts[2].id(), "ct_3");
    }
}

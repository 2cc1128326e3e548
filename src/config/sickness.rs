//! Sickness classification of leave types.
//!
//! Whether a leave type counts as sickness is resolved once per record set:
//! an explicit override from [`EngineConfig::sickness_overrides`] wins,
//! otherwise the leave type name is matched case-insensitively against
//! [`EngineConfig::sickness_match`].

use std::collections::HashMap;

use crate::models::LeaveType;

use super::types::EngineConfig;

/// Resolved `{leave_type_id -> is_sickness}` mapping.
///
/// # Example
///
/// ```
/// use worktime_engine::config::{EngineConfig, SicknessRegistry};
/// use worktime_engine::models::LeaveType;
///
/// let leave_types = vec![
///     LeaveType { id: "lt_vacation".to_string(), name: "Vacation".to_string() },
///     LeaveType { id: "lt_sickness".to_string(), name: "Sickness".to_string() },
/// ];
///
/// let registry = SicknessRegistry::from_leave_types(&leave_types, &EngineConfig::default());
/// assert!(registry.is_sickness("lt_sickness"));
/// assert!(!registry.is_sickness("lt_vacation"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SicknessRegistry {
    flags: HashMap<String, bool>,
}

impl SicknessRegistry {
    /// Resolves the sickness flag of every given leave type.
    pub fn from_leave_types(leave_types: &[LeaveType], config: &EngineConfig) -> Self {
        let needle = config.sickness_match.to_lowercase();

        let flags = leave_types
            .iter()
            .map(|leave_type| {
                let is_sickness = config
                    .sickness_overrides
                    .get(&leave_type.id)
                    .copied()
                    .unwrap_or_else(|| leave_type.name.to_lowercase().contains(&needle));
                (leave_type.id.clone(), is_sickness)
            })
            .collect();

        Self { flags }
    }

    /// Returns true if the leave type counts as sickness.
    ///
    /// Unknown leave types never count as sickness.
    pub fn is_sickness(&self, leave_type_id: &str) -> bool {
        self.flags.get(leave_type_id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave_type(id: &str, name: &str) -> LeaveType {
        LeaveType {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let leave_types = vec![
            leave_type("lt_1", "SICKNESS"),
            leave_type("lt_2", "Sick leave (child)"),
            leave_type("lt_3", "Homesick"),
            leave_type("lt_4", "Vacation"),
        ];

        let registry = SicknessRegistry::from_leave_types(&leave_types, &EngineConfig::default());

        assert!(registry.is_sickness("lt_1"));
        assert!(registry.is_sickness("lt_2"));
        assert!(registry.is_sickness("lt_3"));
        assert!(!registry.is_sickness("lt_4"));
    }

    #[test]
    fn test_override_wins_over_name_match() {
        let mut config = EngineConfig::default();
        config.sickness_overrides.insert("lt_3".to_string(), false);
        config.sickness_overrides.insert("lt_5".to_string(), true);

        let leave_types = vec![leave_type("lt_3", "Homesick"), leave_type("lt_5", "Burnout")];
        let registry = SicknessRegistry::from_leave_types(&leave_types, &config);

        assert!(!registry.is_sickness("lt_3"));
        assert!(registry.is_sickness("lt_5"));
    }

    #[test]
    fn test_custom_match_fragment() {
        let config = EngineConfig {
            sickness_match: "Ziek".to_string(),
            ..EngineConfig::default()
        };

        let leave_types = vec![leave_type("lt_1", "Ziekteverlof"), leave_type("lt_2", "Sick")];
        let registry = SicknessRegistry::from_leave_types(&leave_types, &config);

        assert!(registry.is_sickness("lt_1"));
        assert!(!registry.is_sickness("lt_2"));
    }

    #[test]
    fn test_unknown_leave_type_is_not_sickness() {
        let registry = SicknessRegistry::default();
        assert!(!registry.is_sickness("lt_missing"));
    }
}

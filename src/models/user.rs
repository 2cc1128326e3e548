//! User model.

use serde::{Deserialize, Serialize};

/// Represents an employee whose time is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Login or display name.
    pub username: String,
    /// Inactive users are skipped by availability reports.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

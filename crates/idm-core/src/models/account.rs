//! Account entity - an authenticatable principal keyed by phone number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account uses its phone number as the login identifier in place of a
/// traditional username. `password_hash = None` is the explicit "no usable
/// password" state: password login is disabled, which is not the same thing
/// as an empty password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Phone number in E.164 format, e.g. +15551234567
    pub phone: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with default values and freshly stamped
    /// identifier and timestamps. Callers never supply the id.
    pub fn new(phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone: phone.into(),
            email: None,
            password_hash: None,
            is_staff: false,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Call before persisting a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether password login is possible at all for this account.
    pub fn has_usable_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phone)
    }
}

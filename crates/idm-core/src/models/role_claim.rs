//! Role claim - a role granted to an account, optionally scoped to a
//! department.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A claim is unique per `(account_id, role, department_id)`, where a NULL
/// department (the unscoped/global case) participates in the tuple: an
/// account cannot hold the same role twice in the same scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClaim {
    pub id: Uuid,
    pub account_id: Uuid,
    pub role: Role,
    /// Optional scope. Bare identifier for now: no owning department entity
    /// exists yet, so no referential integrity is enforced.
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoleClaim {
    pub fn new(account_id: Uuid, role: Role, department_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            role,
            department_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether the claim applies everywhere rather than to one department.
    pub fn is_global(&self) -> bool {
        self.department_id.is_none()
    }
}

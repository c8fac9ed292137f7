#![allow(dead_code)]

use idm_core::{Account, Role, RoleClaim, Signature};
use uuid::Uuid;

/// Creates a test Account with a unique phone number per call
pub fn create_test_account(phone: &str) -> Account {
    let mut account = Account::new(phone);
    account.email = Some(format!("test-{}@example.com", account.id));
    account
}

/// Creates a test RoleClaim with sensible defaults
pub fn create_test_role_claim(account_id: Uuid, role: Role, department_id: Option<Uuid>) -> RoleClaim {
    RoleClaim::new(account_id, role, department_id)
}

/// Creates a test Signature
pub fn create_test_signature(account_id: Uuid) -> Signature {
    Signature::new(account_id, format!("signatures/{}.png", account_id))
}

use crate::{Role, RoleClaim};

use uuid::Uuid;

#[test]
fn test_role_claim_new() {
    let account_id = Uuid::new_v4();
    let department_id = Uuid::new_v4();
    let claim = RoleClaim::new(account_id, Role::Admin, Some(department_id));

    assert_eq!(claim.account_id, account_id);
    assert_eq!(claim.role, Role::Admin);
    assert_eq!(claim.department_id, Some(department_id));
    assert_eq!(claim.created_at, claim.updated_at);
}

#[test]
fn test_role_claim_is_global() {
    let account_id = Uuid::new_v4();

    let global = RoleClaim::new(account_id, Role::User, None);
    assert!(global.is_global());

    let scoped = RoleClaim::new(account_id, Role::User, Some(Uuid::new_v4()));
    assert!(!scoped.is_global());
}

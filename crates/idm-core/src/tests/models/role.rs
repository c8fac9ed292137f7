use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Special.as_str(), "special");
    assert_eq!(Role::User.as_str(), "user");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("special").unwrap(), Role::Special);
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert!(Role::from_str("superadmin").is_err());
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_round_trip() {
    for role in [Role::Admin, Role::Special, Role::User] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

use crate::Account;

use std::thread;
use std::time::Duration;

#[test]
fn test_account_new_defaults() {
    let account = Account::new("+15551234567");

    assert_eq!(account.phone, "+15551234567");
    assert_eq!(account.email, None);
    assert_eq!(account.password_hash, None);
    assert!(!account.is_staff);
    assert!(!account.is_superuser);
    assert_eq!(account.created_at, account.updated_at);
}

#[test]
fn test_account_ids_are_unique() {
    let a = Account::new("+15550000001");
    let b = Account::new("+15550000001");

    assert_ne!(a.id, b.id);
}

#[test]
fn test_account_touch_advances_updated_at() {
    let mut account = Account::new("+15551234567");
    let before = account.updated_at;

    thread::sleep(Duration::from_millis(5));
    account.touch();

    assert!(account.updated_at > before);
    assert_eq!(account.created_at, before);
}

#[test]
fn test_account_has_usable_password() {
    let mut account = Account::new("+15551234567");
    assert!(!account.has_usable_password());

    account.password_hash = Some("$argon2id$stub".to_string());
    assert!(account.has_usable_password());
}

#[test]
fn test_account_display_is_phone() {
    let account = Account::new("+15551234567");
    assert_eq!(account.to_string(), "+15551234567");
}

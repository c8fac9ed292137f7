//! Salted password hashing for accounts.
//!
//! Hashes are Argon2id PHC strings, salt included. An account with no stored
//! hash has no usable password: `verify_password` returns false for every
//! candidate, which is not the same as an account whose password is empty.

use crate::{AuthError, Result};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use idm_core::Account;

/// Hash `password` with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Check `candidate` against the account's stored hash. Accounts without a
/// usable password never verify.
pub fn verify_password(account: &Account, candidate: &str) -> bool {
    let Some(stored) = account.password_hash.as_deref() else {
        return false;
    };

    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}

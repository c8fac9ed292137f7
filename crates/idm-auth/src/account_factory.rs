use crate::passwords;
use crate::{AccountOverrides, AuthError, Result};

use std::panic::Location;

use error_location::ErrorLocation;
use idm_core::Account;
use idm_db::AccountRepository;
use tracing::info;

/// Creates and persists accounts. The only supported way to make a new
/// account: it stamps the identifier and timestamps, applies the privilege
/// defaults, and stores the salted password hash (or the explicit
/// no-usable-password state) before handing the record back.
pub struct AccountFactory {
    accounts: AccountRepository,
}

impl AccountFactory {
    pub fn new(accounts: AccountRepository) -> Self {
        Self { accounts }
    }

    /// Create a regular account. `is_staff` and `is_superuser` default to
    /// false unless overridden.
    pub async fn create_user(
        &self,
        phone: &str,
        password: Option<&str>,
        overrides: AccountOverrides,
    ) -> Result<Account> {
        let is_staff = overrides.is_staff.unwrap_or(false);
        let is_superuser = overrides.is_superuser.unwrap_or(false);

        self.create(phone, password, overrides.email, is_staff, is_superuser)
            .await
    }

    /// Create a superuser. Both privilege flags default to true, and
    /// explicitly overriding either to false is an error.
    pub async fn create_superuser(
        &self,
        phone: &str,
        password: Option<&str>,
        overrides: AccountOverrides,
    ) -> Result<Account> {
        if overrides.is_staff == Some(false) {
            return Err(AuthError::SuperuserFlagRequired {
                flag: "is_staff",
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if overrides.is_superuser == Some(false) {
            return Err(AuthError::SuperuserFlagRequired {
                flag: "is_superuser",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.create(phone, password, overrides.email, true, true)
            .await
    }

    async fn create(
        &self,
        phone: &str,
        password: Option<&str>,
        email: Option<String>,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<Account> {
        if phone.is_empty() {
            return Err(AuthError::MissingPhone {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut account = Account::new(phone);
        account.email = email;
        account.is_staff = is_staff;
        account.is_superuser = is_superuser;

        if let Some(password) = password {
            account.password_hash = Some(passwords::hash_password(password)?);
        }

        self.accounts.create(&account).await?;

        info!(account_id = %account.id, is_staff, is_superuser, "account created");

        Ok(account)
    }
}

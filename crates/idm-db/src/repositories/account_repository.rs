use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use idm_core::{Account, validate_phone};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new account. The phone number is validated locally before
    /// the insert; uniqueness is enforced by the storage engine.
    pub async fn create(&self, account: &Account) -> DbErrorResult<()> {
        validate_phone(&account.phone)?;

        let id = account.id.to_string();
        let created_at = account.created_at.timestamp();
        let updated_at = account.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO idm_accounts (
                  id, phone, email, password_hash, is_staff, is_superuser,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&account.phone)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.is_staff)
        .bind(account.is_superuser)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        debug!(account_id = %account.id, "account row created");

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, phone, email, password_hash, is_staff, is_superuser,
                     created_at, updated_at
              FROM idm_accounts
              WHERE id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_account(&r)).transpose()
    }

    pub async fn find_by_phone(&self, phone: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(
            r#"
              SELECT id, phone, email, password_hash, is_staff, is_superuser,
                     created_at, updated_at
              FROM idm_accounts
              WHERE phone = ?
              "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_account(&r)).transpose()
    }

    /// Write back every mutable field. Callers are expected to `touch()` the
    /// model first so the refreshed `updated_at` is persisted with the edit.
    pub async fn update(&self, account: &Account) -> DbErrorResult<bool> {
        validate_phone(&account.phone)?;

        let id = account.id.to_string();
        let updated_at = account.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              UPDATE idm_accounts
              SET phone = ?, email = ?, password_hash = ?,
                  is_staff = ?, is_superuser = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&account.phone)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.is_staff)
        .bind(account.is_superuser)
        .bind(updated_at)
        .bind(&id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the account; role claims and the signature (if any) go with
    /// it via ON DELETE CASCADE.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM idm_accounts WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(account_id = %id, "account row deleted");
        }

        Ok(deleted)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM idm_accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_account(row: &SqliteRow) -> DbErrorResult<Account> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Account {
        id: parse_uuid(&id, "account.id")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        is_staff: row.try_get("is_staff")?,
        is_superuser: row.try_get("is_superuser")?,
        created_at: parse_timestamp(created_at, "account.created_at")?,
        updated_at: parse_timestamp(updated_at, "account.updated_at")?,
    })
}

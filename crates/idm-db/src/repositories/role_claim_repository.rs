use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use idm_core::{Role, RoleClaim};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RoleClaimRepository {
    pool: SqlitePool,
}

impl RoleClaimRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new claim. The `(account, role, department)` uniqueness,
    /// NULL department included, is enforced by the storage engine.
    pub async fn create(&self, claim: &RoleClaim) -> DbErrorResult<()> {
        let id = claim.id.to_string();
        let account_id = claim.account_id.to_string();
        let department_id = claim.department_id.map(|d| d.to_string());
        let created_at = claim.created_at.timestamp();
        let updated_at = claim.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO idm_role_claims (
                  id, account_id, role, department_id, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&account_id)
        .bind(claim.role.as_str())
        .bind(&department_id)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<RoleClaim>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, account_id, role, department_id, created_at, updated_at
              FROM idm_role_claims
              WHERE id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_role_claim(&r)).transpose()
    }

    pub async fn find_by_account(&self, account_id: Uuid) -> DbErrorResult<Vec<RoleClaim>> {
        let account_id_str = account_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, account_id, role, department_id, created_at, updated_at
              FROM idm_role_claims
              WHERE account_id = ?
              ORDER BY created_at
              "#,
        )
        .bind(&account_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_role_claim).collect()
    }

    /// Re-scope or re-role an existing claim. Callers `touch()` the model
    /// first; the uniqueness tuple still applies to the new values.
    pub async fn update(&self, claim: &RoleClaim) -> DbErrorResult<bool> {
        let id = claim.id.to_string();
        let department_id = claim.department_id.map(|d| d.to_string());
        let updated_at = claim.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              UPDATE idm_role_claims
              SET role = ?, department_id = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(claim.role.as_str())
        .bind(&department_id)
        .bind(updated_at)
        .bind(&id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM idm_role_claims WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_role_claim(row: &SqliteRow) -> DbErrorResult<RoleClaim> {
    let id: String = row.try_get("id")?;
    let account_id: String = row.try_get("account_id")?;
    let role: String = row.try_get("role")?;
    let department_id: Option<String> = row.try_get("department_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(RoleClaim {
        id: parse_uuid(&id, "role_claim.id")?,
        account_id: parse_uuid(&account_id, "role_claim.account_id")?,
        role: Role::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid role in role_claim.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        department_id: department_id
            .as_deref()
            .map(|d| parse_uuid(d, "role_claim.department_id"))
            .transpose()?,
        created_at: parse_timestamp(created_at, "role_claim.created_at")?,
        updated_at: parse_timestamp(updated_at, "role_claim.updated_at")?,
    })
}

use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use idm_core::{Signature, validate_image_key};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SignatureRepository {
    pool: SqlitePool,
}

impl SignatureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Strict insert. Fails with a unique violation if the account already
    /// has a signature (one-to-one).
    pub async fn create(&self, signature: &Signature) -> DbErrorResult<()> {
        validate_image_key(&signature.image_key)?;

        let id = signature.id.to_string();
        let account_id = signature.account_id.to_string();
        let created_at = signature.created_at.timestamp();
        let updated_at = signature.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO idm_signatures (id, account_id, image_key, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&account_id)
        .bind(&signature.image_key)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert, or replace the account's existing signature in place. Used by
    /// the upload flow, where a new image supersedes the old one.
    pub async fn upsert(&self, signature: &Signature) -> DbErrorResult<()> {
        validate_image_key(&signature.image_key)?;

        let id = signature.id.to_string();
        let account_id = signature.account_id.to_string();
        let created_at = signature.created_at.timestamp();
        let updated_at = signature.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO idm_signatures (id, account_id, image_key, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT (account_id) DO UPDATE SET
                  image_key = excluded.image_key,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(&id)
        .bind(&account_id)
        .bind(&signature.image_key)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_account(&self, account_id: Uuid) -> DbErrorResult<Option<Signature>> {
        let account_id_str = account_id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, account_id, image_key, created_at, updated_at
              FROM idm_signatures
              WHERE account_id = ?
              "#,
        )
        .bind(&account_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_signature(&r)).transpose()
    }

    pub async fn delete_by_account(&self, account_id: Uuid) -> DbErrorResult<bool> {
        let account_id_str = account_id.to_string();

        let result = sqlx::query("DELETE FROM idm_signatures WHERE account_id = ?")
            .bind(&account_id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_signature(row: &SqliteRow) -> DbErrorResult<Signature> {
    let id: String = row.try_get("id")?;
    let account_id: String = row.try_get("account_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Signature {
        id: parse_uuid(&id, "signature.id")?,
        account_id: parse_uuid(&account_id, "signature.account_id")?,
        image_key: row.try_get("image_key")?,
        created_at: parse_timestamp(created_at, "signature.created_at")?,
        updated_at: parse_timestamp(updated_at, "signature.updated_at")?,
    })
}

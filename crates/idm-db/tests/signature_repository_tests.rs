mod common;

use common::{create_test_account, create_test_pool, create_test_signature};

use idm_core::Signature;
use idm_db::{AccountRepository, DbError, SignatureRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_signature_when_created_then_can_be_found_by_account() {
    // Given: A test database with an account
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();

    let signature = create_test_signature(account.id);

    // When: Creating the signature
    repo.create(&signature).await.unwrap();

    // Then: Finding by account returns it
    let found = repo.find_by_account(account.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(signature.id));
    assert_that!(found.image_key, eq(&signature.image_key));
}

#[tokio::test]
async fn given_account_with_signature_when_second_created_then_fails_with_unique_violation() {
    // Given: An account that already has a signature
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();
    repo.create(&create_test_signature(account.id)).await.unwrap();

    // When: Creating a second signature for the same account
    let err = repo
        .create(&create_test_signature(account.id))
        .await
        .unwrap_err();

    // Then: The one-to-one constraint rejects it
    assert!(
        matches!(err, DbError::UniqueViolation { .. }),
        "expected UniqueViolation, got {err:?}"
    );
}

#[tokio::test]
async fn given_existing_signature_when_upserted_then_image_key_is_replaced() {
    // Given: An account with a signature
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();

    let original = create_test_signature(account.id);
    repo.upsert(&original).await.unwrap();

    // When: Uploading a replacement image
    let replacement = Signature::new(account.id, "signatures/replacement.png");
    repo.upsert(&replacement).await.unwrap();

    // Then: Still exactly one signature, with the new key and original row id
    let found = repo.find_by_account(account.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(original.id));
    assert_that!(found.image_key, eq("signatures/replacement.png"));
}

#[tokio::test]
async fn given_oversized_image_key_then_create_fails_with_validation_error() {
    // Given: A test database with an account
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();

    // When: Creating a signature whose key exceeds 512 chars
    let signature = Signature::new(account.id, "k".repeat(513));
    let err = repo.create(&signature).await.unwrap_err();

    // Then: Local validation rejects it before the insert
    assert!(
        matches!(err, DbError::Validation { .. }),
        "expected Validation, got {err:?}"
    );
}

#[tokio::test]
async fn given_signature_for_unknown_account_then_create_fails_with_fk_violation() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = SignatureRepository::new(pool);

    // When: Creating a signature whose account does not exist
    let err = repo
        .create(&create_test_signature(Uuid::new_v4()))
        .await
        .unwrap_err();

    // Then: The foreign key rejects it
    assert!(
        matches!(err, DbError::ForeignKeyViolation { .. }),
        "expected ForeignKeyViolation, got {err:?}"
    );
}

#[tokio::test]
async fn given_account_with_signature_when_account_deleted_then_signature_cascades() {
    // Given: An account with a signature
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();
    repo.create(&create_test_signature(account.id)).await.unwrap();

    // When: Deleting the account
    accounts.delete(account.id).await.unwrap();

    // Then: The signature is gone too
    assert_that!(repo.find_by_account(account.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_existing_signature_when_deleted_by_account_then_lookup_returns_none() {
    // Given: An account with a signature
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let repo = SignatureRepository::new(pool);

    let account = create_test_account("+15551234567");
    accounts.create(&account).await.unwrap();
    repo.create(&create_test_signature(account.id)).await.unwrap();

    // When: Deleting the signature by owner
    let deleted = repo.delete_by_account(account.id).await.unwrap();

    // Then: It is gone
    assert_that!(deleted, eq(true));
    assert_that!(repo.find_by_account(account.id).await.unwrap(), none());
}

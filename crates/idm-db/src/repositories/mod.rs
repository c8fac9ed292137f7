pub mod account_repository;
pub mod role_claim_repository;
pub mod signature_repository;

// -------------------------------------------------------------------------- //

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Row-decoding helpers shared by the repositories. Stored identifiers and
/// timestamps that fail to decode indicate a corrupt or foreign database.
#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

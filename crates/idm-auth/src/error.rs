use std::panic::Location;

use error_location::ErrorLocation;
use idm_db::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("The phone number must be set {location}")]
    MissingPhone { location: ErrorLocation },

    #[error("Superuser must have {flag}=true {location}")]
    SuperuserFlagRequired {
        flag: &'static str,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

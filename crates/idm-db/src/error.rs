use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {source} {location}")]
    Validation {
        source: idm_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Foreign key constraint violated: {message} {location}")]
    ForeignKeyViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Check constraint violated: {message} {location}")]
    CheckViolation {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db) = &source {
            let message = db.message().to_string();
            match db.kind() {
                ErrorKind::UniqueViolation => return Self::UniqueViolation { message, location },
                ErrorKind::ForeignKeyViolation => {
                    return Self::ForeignKeyViolation { message, location };
                }
                ErrorKind::CheckViolation => return Self::CheckViolation { message, location },
                _ => {}
            }
        }

        Self::Sqlx { source, location }
    }
}

impl From<idm_core::CoreError> for DbError {
    #[track_caller]
    fn from(source: idm_core::CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

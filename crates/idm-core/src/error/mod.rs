use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("The phone number must be set {location}")]
    MissingPhone { location: ErrorLocation },

    #[error(
        "Enter a valid phone number (E.164 format, e.g. +15551234567): got '{value}' {location}"
    )]
    InvalidPhone {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Image key exceeds {max} characters: got {length} {location}")]
    InvalidImageKey {
        length: usize,
        max: usize,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

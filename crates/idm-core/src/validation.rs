//! Pre-write validation mirroring the schema CHECK constraints, for fast
//! local rejection before a value ever reaches the storage engine.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// '+' plus at most 15 digits (E.164 upper bound).
pub const MAX_PHONE_LEN: usize = 16;

/// Object-storage keys are capped by the bucket layout, not by us.
pub const MAX_IMAGE_KEY_LEN: usize = 512;

/// A phone value is valid iff it matches `^\+?[1-9]\d{7,14}$`: optional
/// leading '+', first digit 1-9, 8 to 15 digits total.
#[track_caller]
pub fn validate_phone(phone: &str) -> CoreErrorResult<()> {
    let location = ErrorLocation::from(Location::caller());

    if phone.is_empty() {
        return Err(CoreError::MissingPhone { location });
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let valid = phone.len() <= MAX_PHONE_LEN
        && (8..=15).contains(&digits.len())
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(CoreError::InvalidPhone {
            value: phone.to_string(),
            location,
        });
    }

    Ok(())
}

#[track_caller]
pub fn validate_image_key(image_key: &str) -> CoreErrorResult<()> {
    if image_key.len() > MAX_IMAGE_KEY_LEN {
        return Err(CoreError::InvalidImageKey {
            length: image_key.len(),
            max: MAX_IMAGE_KEY_LEN,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

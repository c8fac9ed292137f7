pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::account::Account;
pub use models::role::Role;
pub use models::role_claim::RoleClaim;
pub use models::signature::Signature;
pub use validation::{MAX_IMAGE_KEY_LEN, MAX_PHONE_LEN, validate_image_key, validate_phone};

#[cfg(test)]
mod tests;

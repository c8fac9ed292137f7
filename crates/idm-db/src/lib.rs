pub mod connection;
pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::role_claim_repository::RoleClaimRepository;
pub use repositories::signature_repository::SignatureRepository;

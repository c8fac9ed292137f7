pub mod account_factory;
pub mod account_overrides;
pub mod error;
pub mod passwords;

pub use account_factory::AccountFactory;
pub use account_overrides::AccountOverrides;
pub use error::{AuthError, Result};

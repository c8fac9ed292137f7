pub mod account;
pub mod role;
pub mod role_claim;
pub mod signature;

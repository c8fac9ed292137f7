mod account;
mod role;
mod role_claim;
mod signature;

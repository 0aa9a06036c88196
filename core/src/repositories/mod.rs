//! Repository interfaces forming the persistence boundary of the core.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};

//! Maintenance helpers for the contacts demo store.
//!
//! Provides the cleanup that removes seeded test contacts from the
//! `contacts` table while leaving every other row untouched.

pub mod cleanup;
pub mod config;
pub mod error;

pub use cleanup::{clear_test_contacts, count_test_contacts, CleanupReport};
pub use config::StoreConfig;
pub use error::StoreError;

//! Store configuration.

use std::path::PathBuf;

/// Default location of the demo database shared with the web application.
pub const DEFAULT_DB_PATH: &str = "/nfs/demo.db";

/// `LIKE` pattern matching every seeded test contact.
pub const DEFAULT_NAME_PATTERN: &str = "Test Name %";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// SQL `LIKE` pattern applied to `contacts.name`
    pub name_pattern: String,
}

impl StoreConfig {
    /// Creates a configuration for the database at `db_path` with the default pattern.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Default::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        }
    }
}

//! Removal of seeded test contacts.
//!
//! The cleanup opens the configured store, deletes every `contacts` row
//! whose `name` matches the configured `LIKE` pattern inside a single
//! transaction, commits, and closes the connection before returning.

use rusqlite::{params, Connection, OpenFlags};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;

const DELETE_MATCHING: &str = "DELETE FROM contacts WHERE name LIKE ?1";
const COUNT_MATCHING: &str = "SELECT COUNT(*) FROM contacts WHERE name LIKE ?1";

/// Outcome of a cleanup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    /// Number of rows removed
    pub deleted: usize,
}

impl CleanupReport {
    /// Human-readable confirmation printed after a successful run.
    pub fn confirmation(&self) -> String {
        format!(
            "Test contacts have been deleted from the database ({} removed).",
            self.deleted
        )
    }
}

/// Opens the store without creating it, so a wrong path is reported
/// instead of silently producing an empty database.
fn open(config: &StoreConfig) -> Result<Connection, StoreError> {
    debug!("Opening contacts store at {}", config.db_path.display());
    Connection::open_with_flags(
        &config.db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| StoreError::Open {
        path: config.db_path.clone(),
        source,
    })
}

fn close(conn: Connection) -> Result<(), StoreError> {
    conn.close().map_err(|(_, err)| StoreError::Close(err))
}

/// Deletes every contact whose name matches `config.name_pattern`.
///
/// Rows that do not match are left untouched. Running the cleanup again
/// without new inserts deletes nothing and still succeeds.
///
/// # Errors
/// Returns [`StoreError::Open`] if the database cannot be opened and
/// [`StoreError::Query`] if the `contacts` table or its `name` column
/// is missing.
pub fn clear_test_contacts(config: &StoreConfig) -> Result<CleanupReport, StoreError> {
    let mut conn = open(config)?;

    let tx = conn.transaction()?;
    let deleted = tx.execute(DELETE_MATCHING, params![config.name_pattern])?;
    tx.commit()?;

    close(conn)?;

    info!(
        "Deleted {} contacts matching '{}' from {}",
        deleted,
        config.name_pattern,
        config.db_path.display()
    );
    Ok(CleanupReport { deleted })
}

/// Counts the contacts [`clear_test_contacts`] would delete, without
/// modifying the store.
pub fn count_test_contacts(config: &StoreConfig) -> Result<usize, StoreError> {
    let conn = open(config)?;
    let count: usize = conn.query_row(COUNT_MATCHING, params![config.name_pattern], |row| {
        row.get(0)
    })?;
    close(conn)?;

    debug!("{} contacts match '{}'", count, config.name_pattern);
    Ok(count)
}

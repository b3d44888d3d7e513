//! Deletes seeded test contacts from the demo database.
//!
//! Run without arguments to clean the shared store at its default
//! location; every row whose name starts with `Test Name ` is removed.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use contacts_store::config::{DEFAULT_DB_PATH, DEFAULT_NAME_PATTERN};
use contacts_store::{clear_test_contacts, count_test_contacts, StoreConfig};

/// Command-line arguments for the cleanup.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SQLite database holding the contacts table
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    /// SQL LIKE pattern selecting the contacts to delete
    #[arg(long, default_value = DEFAULT_NAME_PATTERN)]
    pattern: String,

    /// Only report how many contacts would be deleted
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let config = StoreConfig {
        db_path: args.db_path,
        name_pattern: args.pattern,
    };
    tracing::debug!(
        "Using store {} with pattern '{}'",
        config.db_path.display(),
        config.name_pattern
    );

    if args.dry_run {
        let count = count_test_contacts(&config).with_context(|| {
            format!("Failed to count test contacts in {}", config.db_path.display())
        })?;
        println!("{} test contacts would be deleted from the database.", count);
        return Ok(());
    }

    let report = clear_test_contacts(&config).with_context(|| {
        format!("Failed to clear test contacts in {}", config.db_path.display())
    })?;
    println!("{}", report.confirmation());

    Ok(())
}

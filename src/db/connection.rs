use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

/// Open (or create) the SQLite file at `path` and make sure the schema exists.
/// The parent directory is created on demand so a fresh install works without
/// any manual setup.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    ensure_schema(&conn)?;
    info!(path = %path.display(), "opened rental database");
    Ok(conn)
}

/// In-memory variant of [`open_database`], used by tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the `rentals` table when it is missing. Running it again against a
/// populated database leaves every row untouched.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS rentals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            rent_date TEXT NOT NULL,
            return_date TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create rentals table")?;

    Ok(())
}

/// Release the connection, reporting any error SQLite raises while flushing.
/// Consuming the handle means it cannot be closed twice.
pub fn close_database(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close SQLite database")?;
    info!("closed rental database");
    Ok(())
}

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::models::Rental;

/// Load every rental in insertion order. AUTOINCREMENT keys only grow, so
/// ordering by id is the same as ordering by creation.
pub fn fetch_rentals(conn: &Connection) -> Result<Vec<Rental>> {
    let mut stmt = conn
        .prepare("SELECT id, name, rent_date, return_date FROM rentals ORDER BY id")
        .context("failed to prepare rentals query")?;

    let rentals = stmt
        .query_map([], |row| {
            Ok(Rental {
                id: row.get(0)?,
                name: row.get(1)?,
                rent_date: row.get(2)?,
                return_date: row.get(3)?,
            })
        })
        .context("failed to load rentals")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect rentals")?;

    debug!(count = rentals.len(), "fetched rentals");
    Ok(rentals)
}

/// Insert a rental and hand back the hydrated row. Callers are expected to
/// have checked for empty input; only the NOT NULL constraints apply here.
pub fn create_rental(
    conn: &Connection,
    name: &str,
    rent_date: &str,
    return_date: &str,
) -> Result<Rental> {
    conn.execute(
        "INSERT INTO rentals (name, rent_date, return_date) VALUES (?1, ?2, ?3)",
        params![name, rent_date, return_date],
    )
    .context("failed to insert rental")?;

    let id = conn.last_insert_rowid();
    info!(id, "created rental");
    Ok(Rental {
        id,
        name: name.to_string(),
        rent_date: rent_date.to_string(),
        return_date: return_date.to_string(),
    })
}

/// Remove a rental by id. A missing id is not an error: the row is already
/// gone, which is all the caller asked for.
pub fn delete_rental(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM rentals WHERE id = ?1", params![id])
        .context("failed to delete rental")?;

    if deleted == 0 {
        debug!(id, "delete skipped, rental not found");
    } else {
        info!(id, "deleted rental");
    }
    Ok(())
}

//! Persistence module split across logical submodules.

mod connection;
mod rentals;

pub use connection::{close_database, ensure_schema, open_database, open_in_memory};
pub use rentals::{create_rental, delete_rental, fetch_rentals};

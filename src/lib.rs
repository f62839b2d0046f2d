//! Core library surface for the Rental Tracker terminal application.
//!
//! The binary only wires these pieces together; keeping them in the library
//! lets integration tests drive storage without a terminal.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;

/// Resolved data directory, database and log paths.
pub use config::{AppConfig, ConfigError};

/// Persistence entry points for the `rentals` table.
pub use db::{
    close_database, create_rental, delete_rental, ensure_schema, fetch_rentals, open_database,
    open_in_memory,
};

pub use logging::init_logging;
pub use models::Rental;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

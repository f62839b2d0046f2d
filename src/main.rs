//! Binary entry point: resolve paths, start logging, open the database, and
//! hand the connection to the TUI until the user exits.
use rental_tracker::{close_database, init_logging, open_database, run_app, App, AppConfig};
use tracing::error;

/// Returning a `Result` bubbles fatal problems (an unwritable data directory,
/// a failing query) to the terminal after the screen has been restored.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_home()?;
    config.ensure_data_dir()?;
    init_logging(&config.log_path)?;

    let conn = open_database(&config.db_path)?;
    let mut app = App::new(conn)?;
    let result = run_app(&mut app);
    if let Err(err) = &result {
        error!(error = ?err, "rental tracker stopped on a fatal error");
    }

    let closed = close_database(app.into_connection());
    result.and(closed)
}

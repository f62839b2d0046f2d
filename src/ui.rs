//! Ratatui front-end: one screen with the rental form on top and the list of
//! stored rentals below. Every mutation re-queries storage and rebuilds the
//! list, so what is drawn always matches the database.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;

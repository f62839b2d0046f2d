use anyhow::Result;
use rusqlite::Connection;

use crate::db::delete_rental;
use crate::models::Rental;

type DeleteHandler = Box<dyn Fn(&Connection) -> Result<()>>;

/// One visible line of the rental list together with its Delete control.
/// The handler owns a copy of the row's id taken when the row is built, so
/// each control always deletes its own record.
pub(crate) struct RentalRow {
    pub(crate) id: i64,
    pub(crate) label: String,
    on_delete: DeleteHandler,
}

impl RentalRow {
    pub(crate) fn from_rental(rental: &Rental) -> Self {
        let id = rental.id;
        Self {
            id,
            label: rental.display_line(),
            on_delete: Box::new(move |conn: &Connection| delete_rental(conn, id)),
        }
    }

    /// Fire the row's Delete control.
    pub(crate) fn delete(&self, conn: &Connection) -> Result<()> {
        (self.on_delete)(conn)
    }
}

/// Rows built from the most recent snapshot plus the list cursor.
#[derive(Default)]
pub(crate) struct RentalListScreen {
    pub(crate) rows: Vec<RentalRow>,
    pub(crate) selected: usize,
}

impl RentalListScreen {
    /// Throw away every row and rebuild from `snapshot`.
    pub(crate) fn rebuild(&mut self, snapshot: &[Rental]) {
        self.rows = snapshot.iter().map(RentalRow::from_rental).collect();
        self.ensure_in_bounds();
    }

    pub(crate) fn current_row(&self) -> Option<&RentalRow> {
        self.rows.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = self.selected.saturating_add_signed(offset).min(last);
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

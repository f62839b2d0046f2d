//! Domain model that mirrors the `rentals` table. The struct stays a plain
//! data holder so persistence and presentation can share it without either
//! layer owning the other's concerns.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One customer's rental as stored in SQLite.
pub struct Rental {
    /// Primary key assigned by SQLite. Delete controls carry this value back to
    /// the persistence layer.
    pub id: i64,
    /// Customer name.
    pub name: String,
    /// Date the item left, stored as typed (no format is enforced).
    pub rent_date: String,
    /// Expected return date, stored as typed.
    pub return_date: String,
}

impl Rental {
    /// Compose the `Name - Rent até Return` line shown in the rental list.
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} até {}",
            self.name, self.rent_date, self.return_date
        )
    }
}

impl fmt::Display for Rental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_line())
    }
}

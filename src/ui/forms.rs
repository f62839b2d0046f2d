use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Input fields shown above the rental list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RentalField {
    Name,
    RentDate,
    ReturnDate,
}

impl RentalField {
    pub(crate) const ALL: [RentalField; 3] = [
        RentalField::Name,
        RentalField::RentDate,
        RentalField::ReturnDate,
    ];

    /// Title drawn on the field's border.
    pub(crate) fn label(self) -> &'static str {
        match self {
            RentalField::Name => "Customer Name",
            RentalField::RentDate => "Rent Date (dd/mm/yyyy)",
            RentalField::ReturnDate => "Return Date (dd/mm/yyyy)",
        }
    }
}

/// Raw text typed into the three rental fields. Values are kept exactly as
/// typed; the only rule applied before saving is that none may be empty.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RentalForm {
    pub(crate) name: String,
    pub(crate) rent_date: String,
    pub(crate) return_date: String,
}

impl RentalForm {
    pub(crate) fn value(&self, field: RentalField) -> &str {
        match field {
            RentalField::Name => &self.name,
            RentalField::RentDate => &self.rent_date,
            RentalField::ReturnDate => &self.return_date,
        }
    }

    fn value_mut(&mut self, field: RentalField) -> &mut String {
        match field {
            RentalField::Name => &mut self.name,
            RentalField::RentDate => &mut self.rent_date,
            RentalField::ReturnDate => &mut self.return_date,
        }
    }

    /// Append a character to `field`. Control characters are rejected.
    pub(crate) fn push_char(&mut self, field: RentalField, ch: char) {
        if !ch.is_control() {
            self.value_mut(field).push(ch);
        }
    }

    /// Remove the last character from `field`.
    pub(crate) fn backspace(&mut self, field: RentalField) {
        self.value_mut(field).pop();
    }

    /// True when every field holds at least one character.
    pub(crate) fn is_complete(&self) -> bool {
        RentalField::ALL
            .iter()
            .all(|field| !self.value(*field).is_empty())
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Terminal columns the field's text occupies. Wide characters count
    /// twice, so this is what cursor placement needs rather than `len()`.
    pub(crate) fn value_width(&self, field: RentalField) -> usize {
        Span::raw(self.value(field)).width()
    }

    /// Render the field contents, falling back to a dimmed placeholder.
    pub(crate) fn build_line(&self, field: RentalField, focused: bool) -> Line<'static> {
        let value = self.value(field);
        if value.is_empty() && !focused {
            return Line::from(Span::styled(
                "<required>",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(Span::styled(value.to_string(), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_backspace_target_one_field() {
        let mut form = RentalForm::default();
        form.push_char(RentalField::Name, 'A');
        form.push_char(RentalField::Name, 'n');
        form.push_char(RentalField::RentDate, '0');

        form.backspace(RentalField::Name);

        assert_eq!(form.name, "A");
        assert_eq!(form.rent_date, "0");
        assert!(form.return_date.is_empty());
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = RentalForm::default();
        form.push_char(RentalField::Name, '\n');
        assert!(form.name.is_empty());
    }

    #[test]
    fn completeness_requires_every_field() {
        let mut form = RentalForm {
            name: "Ana".to_string(),
            rent_date: "01/01/2024".to_string(),
            return_date: String::new(),
        };
        assert!(!form.is_complete());

        form.return_date = "10/01/2024".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn whitespace_counts_as_content() {
        let form = RentalForm {
            name: " ".to_string(),
            rent_date: " ".to_string(),
            return_date: " ".to_string(),
        };
        assert!(form.is_complete());
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = RentalForm {
            name: "Ana".to_string(),
            rent_date: "x".to_string(),
            return_date: "y".to_string(),
        };
        form.clear();
        assert_eq!(form, RentalForm::default());
    }

    #[test]
    fn value_width_counts_columns_not_bytes() {
        let form = RentalForm {
            name: "João".to_string(),
            rent_date: "東京".to_string(),
            ..RentalForm::default()
        };
        assert_eq!(form.value_width(RentalField::Name), 4);
        assert_eq!(form.value_width(RentalField::RentDate), 4);
        assert_eq!(form.value_width(RentalField::ReturnDate), 0);
    }
}

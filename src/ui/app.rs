use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use rusqlite::Connection;
use tracing::debug;

use crate::db::{create_rental, fetch_rentals};

use super::forms::{RentalField, RentalForm};
use super::helpers::{focus_block, input_viewport, key_hints};
use super::screens::RentalListScreen;

/// Height of each single-line input box, borders included.
const FIELD_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// Which control receives key presses. `Tab` walks the controls top to
/// bottom and wraps around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
    Field(RentalField),
    AddButton,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Field(RentalField::Name) => Focus::Field(RentalField::RentDate),
            Focus::Field(RentalField::RentDate) => Focus::Field(RentalField::ReturnDate),
            Focus::Field(RentalField::ReturnDate) => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Field(RentalField::Name),
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Field(RentalField::Name) => Focus::List,
            Focus::Field(RentalField::RentDate) => Focus::Field(RentalField::Name),
            Focus::Field(RentalField::ReturnDate) => Focus::Field(RentalField::RentDate),
            Focus::AddButton => Focus::Field(RentalField::ReturnDate),
            Focus::List => Focus::AddButton,
        }
    }
}

/// Ctrl or Alt alone marks a shortcut. Both together is how Windows reports
/// AltGr, which composes ordinary characters such as `@` or `€`.
fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) != modifiers.contains(KeyModifiers::ALT)
}

/// Application state for the single rental screen. The connection is injected
/// by the caller and handed back through [`App::into_connection`] so it can be
/// closed exactly once.
pub struct App {
    conn: Connection,
    form: RentalForm,
    focus: Focus,
    list: RentalListScreen,
    status: Option<String>,
}

impl App {
    /// Take ownership of the storage handle and render the first snapshot.
    pub fn new(conn: Connection) -> Result<Self> {
        let mut app = Self {
            conn,
            form: RentalForm::default(),
            focus: Focus::Field(RentalField::Name),
            list: RentalListScreen::default(),
            status: None,
        };
        app.refresh_list()?;
        Ok(app)
    }

    /// Give the storage handle back to the composition root.
    pub fn into_connection(self) -> Connection {
        self.conn
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    /// Storage errors are not recovered here; they bubble up and end the run.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(false);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Ok(false);
            }
            _ => {}
        }

        match self.focus {
            Focus::Field(field) => self.handle_field_key(field, key)?,
            Focus::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit()?;
                }
            }
            Focus::List => return self.handle_list_key(key.code),
        }

        Ok(false)
    }

    fn handle_field_key(&mut self, field: RentalField, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => {
                self.submit()?;
            }
            KeyCode::Backspace => self.form.backspace(field),
            KeyCode::Char(ch) if !is_shortcut(key.modifiers) => self.form.push_char(field, ch),
            _ => {}
        }
        Ok(())
    }

    fn handle_list_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => self.list.move_selection(-1),
            KeyCode::Down => self.list.move_selection(1),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => self.delete_selected()?,
            _ => {}
        }
        Ok(false)
    }

    /// Save the form when every field has text, otherwise leave everything as
    /// it is without any message.
    fn submit(&mut self) -> Result<()> {
        if !self.form.is_complete() {
            debug!("submit ignored, form incomplete");
            return Ok(());
        }

        let rental = create_rental(
            &self.conn,
            &self.form.name,
            &self.form.rent_date,
            &self.form.return_date,
        )?;
        self.form.clear();
        self.focus = Focus::Field(RentalField::Name);
        self.refresh_list()?;
        self.status = Some(format!("Added rental for {}.", rental.name));
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        let Some(row) = self.list.current_row() else {
            return Ok(());
        };
        let id = row.id;
        row.delete(&self.conn)?;
        self.refresh_list()?;
        self.status = Some(format!("Deleted rental #{id}."));
        Ok(())
    }

    /// Re-query storage and rebuild every row from the fresh snapshot.
    fn refresh_list(&mut self) -> Result<()> {
        let snapshot = fetch_rentals(&self.conn)?;
        self.list.rebuild(&snapshot);
        debug!(rows = self.list.rows.len(), "rental list rebuilt");
        Ok(())
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(frame.area());

        for (field, area) in RentalField::ALL.iter().zip(chunks.iter()) {
            self.draw_field(frame, *area, *field);
        }
        self.draw_add_button(frame, chunks[3]);
        self.draw_rental_list(frame, chunks[4]);
        self.draw_footer(frame, chunks[5]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: RentalField) {
        let focused = self.focus == Focus::Field(field);
        let block = focus_block(field.label(), focused);
        let inner = block.inner(area);
        let (scroll, cursor) = input_viewport(self.form.value_width(field), inner.width);
        let paragraph = Paragraph::new(self.form.build_line(field, focused))
            .block(block)
            .scroll((0, scroll));
        frame.render_widget(paragraph, area);

        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + cursor, inner.y));
        }
    }

    fn draw_add_button(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::AddButton;
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled("[ Add Rental ]", style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }

    fn draw_rental_list(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::List;
        let block = focus_block(&format!("Rentals ({})", self.list.rows.len()), focused);

        if self.list.rows.is_empty() {
            let message = Paragraph::new("No rentals yet. Fill in the fields above and press Enter.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let delete_style = Style::default().fg(Color::Red);
        let items: Vec<ListItem> = self
            .list
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::raw(row.label.clone()),
                    Span::raw("  "),
                    Span::styled("[Delete]", delete_style),
                ]))
            })
            .collect();

        let highlight = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.list.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_line = match &self.status {
            Some(text) => Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(""),
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match self.focus {
            Focus::Field(_) => key_hints(&[
                ("Tab", "Next field"),
                ("Enter", "Add rental"),
                ("Esc", "Quit"),
            ]),
            Focus::AddButton => key_hints(&[
                ("Enter", "Add rental"),
                ("Tab", "Go to list"),
                ("Esc", "Quit"),
            ]),
            Focus::List => key_hints(&[
                ("↑↓", "Select"),
                ("Enter/Del", "Delete"),
                ("Tab", "Back to form"),
                ("q", "Quit"),
            ]),
        }
    }
}

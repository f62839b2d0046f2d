use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

/// Bordered block whose frame turns yellow while it holds focus.
pub(crate) fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Render `[key] action` pairs as a single footer line.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        let separator = if idx + 1 < hints.len() { "   " } else { "" };
        spans.push(Span::raw(format!(" {action}{separator}")));
    }
    Line::from(spans)
}

/// Horizontal scroll and cursor column for a one-line input whose text spans
/// `text_width` columns inside a box `inner_width` columns wide. The last
/// column is kept free for the cursor, so the tail of long text stays visible.
pub(crate) fn input_viewport(text_width: usize, inner_width: u16) -> (u16, u16) {
    let visible = usize::from(inner_width.saturating_sub(1));
    let scroll = text_width.saturating_sub(visible);
    let cursor = text_width - scroll;
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hints_alternate_keys_and_actions() {
        let line = key_hints(&[("Tab", "Next"), ("Esc", "Quit")]);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "[Tab] Next   [Esc] Quit");
    }

    #[test]
    fn input_viewport_keeps_short_text_unscrolled() {
        assert_eq!(input_viewport(0, 20), (0, 0));
        assert_eq!(input_viewport(5, 20), (0, 5));
        assert_eq!(input_viewport(19, 20), (0, 19));
    }

    #[test]
    #[allow(overflowing_literals)]
    fn input_viewport_scrolls_long_text_to_its_tail() {
        assert_eq!(input_viewport(20, 20), (1, 19));
        assert_eq!(input_viewport(100_000, 20), (99_981, 19));
    }

    #[test]
    fn input_viewport_saturates_instead_of_wrapping() {
        let (scroll, cursor) = input_viewport(usize::from(u16::MAX) + 500, 20);
        assert_eq!(scroll, u16::MAX);
        assert_eq!(cursor, 19);
    }

    #[test]
    fn input_viewport_handles_zero_width_box() {
        assert_eq!(input_viewport(7, 0), (7, 0));
    }
}

//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const CARET: &str = "│";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset)
    cursor: usize,
    /// Block title
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the input has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            prompt,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.input_frame(self.focused))
            .title(format!(" {} ", self.prompt));

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled(CARET, Style::default().add_modifier(Modifier::SLOW_BLINK));
        let cursor = self.cursor.min(self.query.len());

        // Caret only shows while focused
        let spans = if self.focused {
            let (before, after) = self.query.split_at(cursor);
            vec![Span::raw(before), caret, Span::raw(after)]
        } else if self.query.is_empty() {
            vec![Span::styled("Tab to focus", self.theme.chrome())]
        } else {
            vec![Span::raw(self.query)]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    /// Row text between the side borders
    fn inner_text(buf: &Buffer, y: u16) -> String {
        (1..buf.area.width - 1)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_title_query_and_caret() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("gra", 2, "Fruit", &theme).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains(" Fruit "));
        assert!(inner_text(&buf, 1).starts_with("gr│a"));
    }

    #[test]
    fn test_unfocused_hides_caret() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("gra", 3, "Fruit", &theme)
            .focused(false)
            .render(area, &mut buf);

        let line = inner_text(&buf, 1);
        assert!(line.contains("gra"));
        assert!(!line.contains(CARET));
    }
}

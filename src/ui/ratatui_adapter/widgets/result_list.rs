//! Dropdown list of ranked match results

use crate::matcher::MatchResult;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// First visible row so that `highlighted` stays in a window of `height` rows
#[must_use]
pub fn scroll_offset(highlighted: Option<usize>, height: usize) -> usize {
    match highlighted {
        Some(row) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    }
}

/// Result list widget with match highlighting
pub struct ResultList<'a> {
    results: &'a [MatchResult],
    highlighted: Option<usize>,
    offset: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    /// Create a list over `results`, out of `total` candidates
    #[must_use]
    pub const fn new(results: &'a [MatchResult], total: usize, theme: &'a Theme) -> Self {
        Self {
            results,
            highlighted: None,
            offset: 0,
            total,
            theme,
        }
    }

    #[must_use]
    pub const fn highlighted(mut self, highlighted: Option<usize>) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Position of the first visible result
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn render_result(&self, result: &MatchResult, is_cursor: bool) -> ListItem<'static> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let base = self.theme.row(is_cursor);
        let matched = self.theme.matched(base);

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.marker()),
            Span::raw(" "),
        ];
        spans.extend(
            result
                .segments()
                .into_iter()
                .map(|(text, is_match)| Span::styled(text, if is_match { matched } else { base })),
        );

        ListItem::new(Line::from(spans)).style(base)
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Results ({}/{}) ", self.results.len(), self.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.chrome())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(usize::from(inner.height))
            .map(|(row, result)| self.render_result(result, self.highlighted == Some(row)))
            .collect();

        List::new(items).render(inner, buf);
    }
}

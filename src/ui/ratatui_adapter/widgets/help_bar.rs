//! Key hints for what the input accepts right now

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

type Hint = (&'static str, &'static str);

const OPEN: &[Hint] = &[
    ("↑/↓", "move"),
    ("Enter", "pick"),
    ("Esc", "clear"),
    ("Tab", "blur"),
    ("ctrl-c", "quit"),
];
const TYPING: &[Hint] = &[("type", "search"), ("Tab", "blur"), ("ctrl-c", "quit")];
const BLURRED_OPEN: &[Hint] = &[("click", "pick"), ("Tab", "focus"), ("ctrl-c", "quit")];
const BLURRED: &[Hint] = &[("Tab", "focus"), ("ctrl-c", "quit")];

/// Hint line under the status bar
pub struct HelpBar<'a> {
    focused: bool,
    open: bool,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            focused: true,
            open: false,
            theme,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether the dropdown is showing
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    const fn hints(&self) -> &'static [Hint] {
        match (self.focused, self.open) {
            (true, true) => OPEN,
            (true, false) => TYPING,
            (false, true) => BLURRED_OPEN,
            (false, false) => BLURRED,
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints()
            .iter()
            .enumerate()
            .flat_map(|(i, &(key, action))| {
                let sep = if i == 0 { "" } else { " · " };
                [
                    Span::styled(sep, self.theme.chrome()),
                    Span::styled(key, self.theme.marker()),
                    Span::raw(" "),
                    Span::raw(action),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bar: HelpBar<'_>) -> String {
        let area = Rect::new(0, 0, 70, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_hints_follow_dropdown() {
        let theme = Theme::default();

        let open = render(HelpBar::new(&theme).open(true));
        assert!(open.starts_with("↑/↓ move · Enter pick · Esc clear"));

        let typing = render(HelpBar::new(&theme));
        assert!(typing.starts_with("type search · Tab blur"));
        assert!(!typing.contains("Enter"));
    }

    #[test]
    fn test_blurred_hints() {
        let theme = Theme::default();

        let text = render(HelpBar::new(&theme).focused(false).open(true));
        assert!(text.starts_with("click pick · Tab focus"));

        let text = render(HelpBar::new(&theme).focused(false));
        assert!(text.starts_with("Tab focus · ctrl-c quit"));
    }
}

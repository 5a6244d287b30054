//! Status bar widget for the last message and the dropdown phase

use crate::ui::ratatui_adapter::state::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use crate::widget::Phase;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    phase: Phase,
    close_pending: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, phase: Phase, theme: &'a Theme) -> Self {
        Self {
            message,
            phase,
            close_pending: false,
            theme,
        }
    }

    /// Mark a deferred close as armed
    #[must_use]
    pub const fn close_pending(mut self, pending: bool) -> Self {
        self.close_pending = pending;
        self
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Info => "ℹ ",
        }
    }

    fn indicator(&self) -> Span<'static> {
        let text = match (self.phase, self.close_pending) {
            (Phase::Open(_), true) => "[closing]".to_string(),
            (Phase::Open(Some(row)), false) => format!("[open {}]", row + 1),
            (Phase::Open(None), false) => "[open]".to_string(),
            (Phase::Closed, _) => "[closed]".to_string(),
        };
        Span::styled(text, self.theme.phase(self.phase, self.close_pending))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.chrome())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        // Left: last message, right: dropdown phase
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.theme.message(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        Paragraph::new(Line::from(self.indicator())).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn render(bar: StatusBar<'_>) -> String {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_message_and_phase() {
        let theme = Theme::default();
        let message = StatusMessage::success("Selected grape");

        let text = render(StatusBar::new(Some(&message), Phase::Open(Some(1)), &theme));
        assert!(text.contains("✓ Selected grape"));
        assert!(text.contains("[open 2]"));
    }

    #[test]
    fn test_closed_and_pending_indicators() {
        let theme = Theme::default();

        assert!(render(StatusBar::new(None, Phase::Closed, &theme)).contains("[closed]"));
        assert!(
            render(StatusBar::new(None, Phase::Open(Some(0)), &theme).close_pending(true))
                .contains("[closing]")
        );
    }
}

//! Colors of the autocomplete screen, one per role
//!
//! Widgets ask for a style by what they draw (input frame, dropdown row,
//! matched text, phase indicator) rather than by color.

use super::state::MessageLevel;
use crate::widget::Phase;
use ratatui::style::{Color, Modifier, Style};

/// Role colors for the autocomplete screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Input frame while the input has focus
    pub focus: Color,
    /// Frames, separators and placeholder text
    pub chrome: Color,
    /// Background of the highlighted dropdown row
    pub highlight_bg: Color,
    /// Text of the highlighted dropdown row
    pub highlight_fg: Color,
    /// Matched characters within a row
    pub matched: Color,
    /// Dropdown indicator while open
    pub open: Color,
    /// Dropdown indicator while a deferred close is armed
    pub closing: Color,
    /// Status line after a selection fired
    pub selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus: Color::Cyan,
            chrome: Color::DarkGray,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            matched: Color::Yellow,
            open: Color::Cyan,
            closing: Color::Yellow,
            selected: Color::Green,
        }
    }
}

impl Theme {
    /// Frame of the query input
    #[must_use]
    pub fn input_frame(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            self.chrome()
        }
    }

    /// Frames, separators and placeholders
    #[must_use]
    pub fn chrome(&self) -> Style {
        Style::default().fg(self.chrome)
    }

    /// Base style of a dropdown row
    #[must_use]
    pub fn row(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .bg(self.highlight_bg)
                .fg(self.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    /// Matched characters, layered over the row style
    #[must_use]
    pub fn matched(&self, row: Style) -> Style {
        row.patch(
            Style::default()
                .fg(self.matched)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    }

    /// The `>` marker on the highlighted row and key names in hints
    #[must_use]
    pub fn marker(&self) -> Style {
        Style::default()
            .fg(self.focus)
            .add_modifier(Modifier::BOLD)
    }

    /// Dropdown phase indicator
    #[must_use]
    pub fn phase(&self, phase: Phase, close_pending: bool) -> Style {
        match (phase, close_pending) {
            (Phase::Open(_), true) => Style::default().fg(self.closing),
            (Phase::Open(_), false) => Style::default().fg(self.open),
            (Phase::Closed, _) => self.chrome(),
        }
    }

    /// Status line message
    #[must_use]
    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => Style::default().fg(self.selected),
            MessageLevel::Info => Style::default().fg(self.open),
        }
    }
}

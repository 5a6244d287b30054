//! TUI-local state
//!
//! The widget snapshot owns everything the dropdown shows. What lives here is
//! purely presentational: the line editor behind the search bar and the
//! status line message.

/// Line editor for the search input
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEditor {
    text: String,
    cursor: usize,
}

impl QueryEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into [`Self::text`]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor; returns whether text changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Delete the character under the cursor; returns whether text changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Delete the word before the cursor; returns whether text changed
    pub fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let trimmed = self.text[..self.cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Clear the line; returns whether text changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    pub const fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Adopt text set by the widget (e.g. cleared on dismiss)
    ///
    /// Returns whether the line was replaced. The cursor moves to the end.
    pub fn sync(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        self.cursor = self.text.len();
        true
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> QueryEditor {
        let mut editor = QueryEditor::new();
        for c in text.chars() {
            editor.push(c);
        }
        editor
    }

    #[test]
    fn test_push_and_backspace() {
        let mut editor = editor("grape");
        assert_eq!(editor.text(), "grape");
        assert_eq!(editor.cursor(), 5);

        assert!(editor.backspace());
        assert_eq!(editor.text(), "grap");
        assert_eq!(editor.cursor(), 4);

        editor.home();
        assert!(!editor.backspace());
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut editor = editor("çaé");
        editor.left();
        assert_eq!(editor.cursor(), 3);
        editor.left();
        editor.left();
        assert_eq!(editor.cursor(), 0);
        editor.left();
        assert_eq!(editor.cursor(), 0);

        editor.right();
        assert_eq!(editor.cursor(), 2);
        assert!(editor.delete());
        assert_eq!(editor.text(), "çé");
    }

    #[test]
    fn test_insert_mid_line() {
        let mut editor = editor("ape");
        editor.home();
        editor.push('g');
        editor.push('r');
        assert_eq!(editor.text(), "grape");
        assert_eq!(editor.cursor(), 2);
        editor.end();
        assert!(!editor.delete());
    }

    #[test]
    fn test_delete_word() {
        let mut editor = editor("red apple ");
        assert!(editor.delete_word());
        assert_eq!(editor.text(), "red ");
        assert!(editor.delete_word());
        assert_eq!(editor.text(), "");
        assert!(!editor.delete_word());
    }

    #[test]
    fn test_clear_and_sync() {
        let mut editor = editor("kiwi");
        assert!(editor.clear());
        assert!(!editor.clear());

        assert!(editor.sync("plum"));
        assert_eq!(editor.cursor(), 4);
        assert!(!editor.sync("plum"));
        assert!(editor.sync(""));
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_status_message_levels() {
        assert_eq!(StatusMessage::info("x").level, MessageLevel::Info);
        assert_eq!(StatusMessage::success("x").level, MessageLevel::Success);
    }
}

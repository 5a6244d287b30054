//! Event handling for the ratatui TUI
//!
//! Normalizes crossterm events into widget [`Intent`]s. The handler keeps
//! only input-local state: the line editor, whether the search input has
//! focus, and whether the pointer was over the list at the last mouse event.
//!
//! Navigation keys follow a two-phase protocol. The press is swallowed (it
//! never reaches the line editor) and the release carries the intent.
//! Terminals that cannot report releases run in [`KeyMode::PressOnly`], where
//! a press produces both phases at once.

use super::state::QueryEditor;
use crate::config::KeyRelease;
use crate::widget::Intent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// What a handled event asks of the host loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply an intent to the widget
    Intent(Intent),
    /// Re-render without a widget transition (caret moved, resize)
    Redraw,
    /// Leave the application
    Quit,
}

/// How navigation keys are reported by the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Act on key release
    Release,
    /// Act on key press
    PressOnly,
}

impl KeyMode {
    /// Pick the mode from the configured setting and terminal support
    #[must_use]
    pub const fn resolve(setting: KeyRelease, supported: bool) -> Self {
        match setting {
            KeyRelease::Always => Self::Release,
            KeyRelease::Never => Self::PressOnly,
            KeyRelease::Auto if supported => Self::Release,
            KeyRelease::Auto => Self::PressOnly,
        }
    }
}

/// Rendered geometry of the dropdown list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListArea {
    /// Whole list including its border; the pointer region
    pub area: Rect,
    /// Rows inside the border
    pub rows: Rect,
    /// Result position of the first visible row
    pub offset: usize,
    /// Number of results in the list
    pub len: usize,
}

impl ListArea {
    /// Result position of the row at `pos`, if `pos` is on a result row
    #[must_use]
    pub fn row_at(&self, pos: Position) -> Option<usize> {
        if !self.rows.contains(pos) {
            return None;
        }
        let row = self.offset + usize::from(pos.y - self.rows.y);
        (row < self.len).then_some(row)
    }
}

/// Geometry reported by the last draw, used for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    pub input: Rect,
    pub list: Option<ListArea>,
}

impl HitMap {
    #[must_use]
    pub fn is_over_list(&self, pos: Position) -> bool {
        self.list.is_some_and(|list| list.area.contains(pos))
    }
}

/// Translates terminal events into intents
#[derive(Debug, Clone)]
pub struct InputHandler {
    editor: QueryEditor,
    mode: KeyMode,
    focused: bool,
    refocus_on_terminal_focus: bool,
    pointer_over_list: bool,
    pointer: Option<Position>,
    nav_key_down: Option<KeyCode>,
}

impl InputHandler {
    /// Create a handler whose search input starts focused
    #[must_use]
    pub fn new(mode: KeyMode) -> Self {
        Self {
            editor: QueryEditor::new(),
            mode,
            focused: true,
            refocus_on_terminal_focus: false,
            pointer_over_list: false,
            pointer: None,
            nav_key_down: None,
        }
    }

    #[must_use]
    pub const fn editor(&self) -> &QueryEditor {
        &self.editor
    }

    #[must_use]
    pub const fn mode(&self) -> KeyMode {
        self.mode
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub const fn is_pointer_over_list(&self) -> bool {
        self.pointer_over_list
    }

    /// Navigation key whose press is waiting for its release
    #[must_use]
    pub const fn nav_key_down(&self) -> Option<KeyCode> {
        self.nav_key_down
    }

    /// Adopt the widget's query after a transition changed it
    pub fn sync_query(&mut self, query: &str) -> bool {
        self.editor.sync(query)
    }

    /// Handle one terminal event
    pub fn handle(&mut self, event: &Event, hits: &HitMap) -> Vec<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, hits),
            Event::FocusLost => {
                if self.focused {
                    self.refocus_on_terminal_focus = true;
                    self.blur()
                } else {
                    Vec::new()
                }
            }
            Event::FocusGained => {
                if std::mem::take(&mut self.refocus_on_terminal_focus) {
                    self.focus()
                } else {
                    Vec::new()
                }
            }
            Event::Resize(_, _) => vec![Action::Redraw],
            Event::Paste(text) if self.focused => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.editor.push(c);
                }
                self.query_changed()
            }
            Event::Paste(_) => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.kind {
            KeyEventKind::Release => self.handle_release(key.code),
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_press(key),
        }
    }

    fn handle_press(&mut self, key: KeyEvent) -> Vec<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c' | 'q'), KeyModifiers::CONTROL) => return vec![Action::Quit],
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                return if self.focused {
                    self.blur()
                } else {
                    self.focus()
                };
            }
            _ => {}
        }

        if !self.focused {
            return Vec::new();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc, _) => {
                if key.kind == KeyEventKind::Repeat && self.mode == KeyMode::Release {
                    return Vec::new();
                }
                self.nav_key_down = Some(key.code);
                match self.mode {
                    KeyMode::Release => Vec::new(),
                    KeyMode::PressOnly => self.handle_release(key.code),
                }
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.editor.clear() {
                    self.query_changed()
                } else {
                    Vec::new()
                }
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.editor.delete_word() {
                    self.query_changed()
                } else {
                    Vec::new()
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.editor.push(c);
                self.query_changed()
            }
            (KeyCode::Backspace, _) => {
                if self.editor.backspace() {
                    self.query_changed()
                } else {
                    Vec::new()
                }
            }
            (KeyCode::Delete, _) => {
                if self.editor.delete() {
                    self.query_changed()
                } else {
                    Vec::new()
                }
            }
            (KeyCode::Left, _) => {
                self.editor.left();
                vec![Action::Redraw]
            }
            (KeyCode::Right, _) => {
                self.editor.right();
                vec![Action::Redraw]
            }
            (KeyCode::Home, _) => {
                self.editor.home();
                vec![Action::Redraw]
            }
            (KeyCode::End, _) => {
                self.editor.end();
                vec![Action::Redraw]
            }
            _ => Vec::new(),
        }
    }

    fn handle_release(&mut self, code: KeyCode) -> Vec<Action> {
        if !self.focused {
            return Vec::new();
        }
        let intent = match code {
            KeyCode::Up => Intent::NavigatePrevious,
            KeyCode::Down => Intent::NavigateNext,
            KeyCode::Enter => Intent::Confirm(None),
            KeyCode::Esc => Intent::Dismiss,
            _ => return Vec::new(),
        };
        if self.nav_key_down == Some(code) {
            self.nav_key_down = None;
        }
        vec![Action::Intent(intent)]
    }

    /// Re-test the last pointer position against freshly rendered geometry
    ///
    /// The list can appear or vanish under a pointer that has not moved.
    pub fn sync_pointer(&mut self, hits: &HitMap) -> Vec<Action> {
        match self.pointer {
            Some(pos) => self.track_pointer(pos, hits),
            None => Vec::new(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, hits: &HitMap) -> Vec<Action> {
        let pos = Position::new(mouse.column, mouse.row);
        self.pointer = Some(pos);
        let mut actions = self.track_pointer(pos, hits);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = hits.list.and_then(|list| list.row_at(pos)) {
                    actions.push(Action::Intent(Intent::Confirm(Some(row))));
                } else if hits.input.contains(pos) {
                    if self.focused {
                        actions.push(Action::Redraw);
                    } else {
                        actions.extend(self.focus());
                    }
                } else if self.focused && !hits.is_over_list(pos) {
                    actions.extend(self.blur());
                }
            }
            MouseEventKind::ScrollUp if self.focused && self.pointer_over_list => {
                actions.push(Action::Intent(Intent::NavigatePrevious));
            }
            MouseEventKind::ScrollDown if self.focused && self.pointer_over_list => {
                actions.push(Action::Intent(Intent::NavigateNext));
            }
            _ => {}
        }

        actions
    }

    /// Emit enter/leave when the pointer crosses the list boundary
    fn track_pointer(&mut self, pos: Position, hits: &HitMap) -> Vec<Action> {
        let over = hits.is_over_list(pos);
        if over == self.pointer_over_list {
            return Vec::new();
        }
        self.pointer_over_list = over;
        let intent = if over {
            Intent::PointerEnteredList
        } else {
            Intent::PointerLeftList
        };
        vec![Action::Intent(intent)]
    }

    fn focus(&mut self) -> Vec<Action> {
        self.focused = true;
        vec![Action::Intent(Intent::FocusGained)]
    }

    fn blur(&mut self) -> Vec<Action> {
        self.focused = false;
        self.nav_key_down = None;
        vec![Action::Intent(Intent::FocusLost)]
    }

    fn query_changed(&self) -> Vec<Action> {
        vec![Action::Intent(Intent::query(self.editor.text()))]
    }
}

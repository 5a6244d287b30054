//! The interactive autocomplete screen
//!
//! Wires crossterm events through the [`InputHandler`] into the widget, and
//! renders each published snapshot. The poll timeout never exceeds the time
//! left on an armed deferred close, so the close fires on schedule.

use super::events::{Action, HitMap, InputHandler, KeyMode, ListArea};
use super::session::{CrosstermTerminal, TerminalSession, supports_key_release};
use super::state::StatusMessage;
use super::theme::Theme;
use super::widgets::{HelpBar, ResultList, SearchBar, StatusBar, scroll_offset};
use crate::config::KeyRelease;
use crate::matcher::MatchEngine;
use crate::ui::error::Result;
use crate::widget::{Autocomplete, Selection, WidgetState};
use crossterm::event::{self, Event};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll timeout while no deferred close is armed
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the autocomplete screen until the user quits
///
/// Returns every selection fired during the session, in order.
///
/// # Errors
///
/// Returns `UiError::IoError` if the terminal cannot be set up, drawn to or
/// read from.
pub fn run<E: MatchEngine>(
    widget: Autocomplete<E>,
    key_release: KeyRelease,
    prompt: &str,
) -> Result<Vec<Selection>> {
    let mode = KeyMode::resolve(key_release, supports_key_release());
    info!(?mode, candidates = widget.candidates().len(), "starting autocomplete");

    let mut session = TerminalSession::start(mode == KeyMode::Release)?;
    App::new(widget, mode)
        .with_prompt(prompt)
        .run(session.terminal_mut())
}

/// Autocomplete screen state
pub struct App<E> {
    widget: Autocomplete<E>,
    input: InputHandler,
    snapshot: Arc<WidgetState>,
    close_pending: bool,
    hits: HitMap,
    theme: Theme,
    prompt: String,
    status: Option<StatusMessage>,
    selections: Vec<Selection>,
    should_quit: bool,
}

impl<E: MatchEngine> App<E> {
    #[must_use]
    pub fn new(widget: Autocomplete<E>, mode: KeyMode) -> Self {
        let status = StatusMessage::info(format!(
            "{} candidates, type to search",
            widget.candidates().len()
        ));
        Self {
            snapshot: widget.snapshot(),
            close_pending: widget.is_close_pending(),
            widget,
            input: InputHandler::new(mode),
            hits: HitMap::default(),
            theme: Theme::default(),
            prompt: "Search".to_string(),
            status: Some(status),
            selections: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub const fn widget(&self) -> &Autocomplete<E> {
        &self.widget
    }

    #[must_use]
    pub const fn input(&self) -> &InputHandler {
        &self.input
    }

    /// Geometry of the last render
    #[must_use]
    pub const fn hits(&self) -> &HitMap {
        &self.hits
    }

    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one terminal event at `now`; returns whether to redraw
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        let actions = self.input.handle(event, &self.hits);
        self.perform(actions, now)
    }

    /// Tell the widget whether the last render moved the list under or away
    /// from the resting pointer; returns whether to redraw
    pub fn sync_pointer(&mut self, now: Instant) -> bool {
        let actions = self.input.sync_pointer(&self.hits);
        self.perform(actions, now)
    }

    fn perform(&mut self, actions: Vec<Action>, now: Instant) -> bool {
        let mut dirty = false;
        for action in actions {
            match action {
                Action::Intent(intent) => {
                    let transition = self.widget.apply_at(intent, now);
                    if let Some(selection) = transition.selection {
                        self.status = Some(StatusMessage::success(format!(
                            "Selected {}",
                            selection.candidate
                        )));
                        self.selections.push(selection);
                        dirty = true;
                    }
                    dirty |= self.refresh();
                }
                Action::Redraw => dirty = true,
                Action::Quit => {
                    debug!("quit requested");
                    self.should_quit = true;
                }
            }
        }
        dirty
    }

    /// Fire a due deferred close; returns whether to redraw
    pub fn tick(&mut self, now: Instant) -> bool {
        self.widget.tick(now);
        self.refresh()
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.widget.next_deadline().map_or(IDLE_POLL, |deadline| {
            deadline.saturating_duration_since(now).min(IDLE_POLL)
        })
    }

    /// Pick up a newly published snapshot
    fn refresh(&mut self) -> bool {
        let pending = self.widget.is_close_pending();
        let pending_changed = pending != self.close_pending;
        self.close_pending = pending;

        let snapshot = self.widget.snapshot();
        if Arc::ptr_eq(&snapshot, &self.snapshot) {
            return pending_changed;
        }
        self.input.sync_query(snapshot.query());
        self.snapshot = snapshot;
        true
    }

    /// Render the screen and record its geometry for hit testing
    pub fn render(&mut self, frame: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Dropdown
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let editor = self.input.editor();
        let search_bar = SearchBar::new(editor.text(), editor.cursor(), &self.prompt, &self.theme)
            .focused(self.input.is_focused());
        frame.render_widget(search_bar, main_layout[0]);

        let list = self
            .snapshot
            .is_open()
            .then(|| self.render_list(frame, main_layout[1]));

        let status_bar = StatusBar::new(self.status.as_ref(), self.snapshot.phase(), &self.theme)
            .close_pending(self.close_pending);
        frame.render_widget(status_bar, main_layout[2]);

        let help_bar = HelpBar::new(&self.theme)
            .focused(self.input.is_focused())
            .open(self.snapshot.is_open());
        frame.render_widget(help_bar, main_layout[3]);

        self.hits = HitMap {
            input: main_layout[0],
            list,
        };
    }

    /// Dropdown under the input, half the screen wide and as tall as needed
    fn render_list(&self, frame: &mut Frame, body: Rect) -> ListArea {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);

        let results = self.snapshot.results();
        let wanted = u16::try_from(results.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let area = Rect {
            height: wanted.min(columns[0].height),
            ..columns[0]
        };
        let rows = Block::bordered().inner(area);
        let offset = scroll_offset(self.snapshot.highlighted(), usize::from(rows.height));

        let list = ResultList::new(results, self.widget.candidates().len(), &self.theme)
            .highlighted(self.snapshot.highlighted())
            .offset(offset);
        frame.render_widget(list, area);

        ListArea {
            area,
            rows,
            offset,
            len: results.len(),
        }
    }

    /// Event loop
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if drawing or reading events fails.
    pub fn run(mut self, terminal: &mut CrosstermTerminal) -> Result<Vec<Selection>> {
        let mut dirty = true;
        while !self.should_quit {
            if dirty {
                terminal.draw(|frame| self.render(frame))?;
                dirty = self.sync_pointer(Instant::now());
                continue;
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                let event = event::read()?;
                dirty |= self.handle_event(&event, Instant::now());
            }
            dirty |= self.tick(Instant::now());
        }

        info!(selections = self.selections.len(), "autocomplete finished");
        Ok(self.selections)
    }
}

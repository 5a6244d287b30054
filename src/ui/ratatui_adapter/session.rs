//! Terminal session guard
//!
//! Holds raw mode, the alternate screen, mouse capture, focus reporting and
//! (optionally) key release reporting for as long as it lives. Everything is
//! released in `Drop`, so an early return or a panic unwinding through the
//! run loop still leaves the terminal usable.

use crate::ui::error::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Whether the terminal can report key release events
///
/// Probe failures count as unsupported.
#[must_use]
pub fn supports_key_release() -> bool {
    crossterm::terminal::supports_keyboard_enhancement().unwrap_or_else(|e| {
        warn!(error = %e, "keyboard enhancement query failed");
        false
    })
}

/// RAII guard over the interactive terminal
pub struct TerminalSession {
    terminal: CrosstermTerminal,
    key_release: bool,
}

impl TerminalSession {
    /// Enter the interactive terminal
    ///
    /// With `key_release` set, the terminal is asked to report key release
    /// events.
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if the terminal cannot be configured.
    /// Whatever was already enabled is released before returning.
    pub fn start(key_release: bool) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };

        // From here on Drop restores the terminal
        let mut session = Self {
            terminal,
            key_release: false,
        };
        execute!(
            session.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        if key_release {
            execute!(
                session.terminal.backend_mut(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            session.key_release = true;
        }
        debug!(key_release, "terminal session started");
        Ok(session)
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let backend = self.terminal.backend_mut();
        if self.key_release {
            let _ = execute!(backend, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            backend,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
        debug!("terminal session ended");
    }
}

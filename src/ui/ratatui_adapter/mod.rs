//! Ratatui-based autocomplete screen
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │     (event loop, render, deferred close)    │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌──────────────┐
//! │   events   │ │  widgets  │ │   session    │
//! │  (intents) │ │ (ratatui) │ │ (crossterm)  │
//! └────────────┘ └───────────┘ └──────────────┘
//! ```
//!
//! # Features
//!
//! - **Key release navigation** where the terminal reports releases, with a
//!   press-only fallback
//! - **Pointer tracking** over the dropdown via mouse capture
//! - **Focus tracking** via terminal focus reporting and Tab
//! - **Status bar** with the last selection and the dropdown phase

mod app;
mod events;
mod session;
mod state;
mod theme;
pub mod widgets;

pub use app::{App, run};
pub use events::{Action, HitMap, InputHandler, KeyMode, ListArea};
pub use session::{CrosstermTerminal, TerminalSession, supports_key_release};
pub use state::{MessageLevel, QueryEditor, StatusMessage};
pub use theme::Theme;

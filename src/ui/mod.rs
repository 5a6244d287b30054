//! Terminal front end
//!
//! The terminal stands in for a browser: crossterm key, mouse and focus
//! events are the raw UI events, and ratatui renders the widget snapshot.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Event   ┌──────────────┐  Intent  ┌──────────────┐
//! │  crossterm   │ ───────▶ │ InputHandler │ ───────▶ │ Autocomplete │
//! └──────────────┘          └──────▲───────┘          └──────┬───────┘
//!                                  │ HitMap                  │ snapshot
//!                           ┌──────┴───────┐                 │
//!                           │   widgets    │ ◀───────────────┘
//!                           │  (ratatui)   │
//!                           └──────────────┘
//! ```
//!
//! The renderer reports where the input and the dropdown landed
//! ([`HitMap`]), which the input handler uses to turn mouse movement into
//! pointer enter/leave intents and clicks into row confirmations.
//!
//! # Running
//!
//! ```no_run
//! use fuzzpick::config::KeyRelease;
//! use fuzzpick::dataset;
//! use fuzzpick::matcher::NucleoEngine;
//! use fuzzpick::ui::ratatui_adapter;
//! use fuzzpick::widget::Autocomplete;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let widget = Autocomplete::new(NucleoEngine::new(), dataset::sample());
//! let selections = ratatui_adapter::run(widget, KeyRelease::Auto, "Fruit")?;
//! for selection in selections {
//!     println!("{}", selection.candidate);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Non-interactive output (the `match` command and the selection report)
//! goes through [`output::OutputWriter`].

pub mod error;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{OutputWriter, ResultFormat, StdoutWriter};
pub use ratatui_adapter::{HitMap, InputHandler, KeyMode};

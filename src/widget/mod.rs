//! Autocomplete interaction state machine
//!
//! This is the widget core: it owns [`WidgetState`] and changes it only in
//! response to [`Intent`]s. Everything else (the input handler turning
//! terminal events into intents, the view drawing snapshots) lives in
//! [`crate::ui`].
//!
//! # States
//!
//! ```text
//!              QueryChanged (results) / FocusGained (results)
//!   ┌────────┐ ─────────────────────────────────────────────▶ ┌──────────────┐
//!   │ Closed │                                               │ Open(row)    │
//!   └────────┘ ◀───────────────────────────────────────────── └──────────────┘
//!              Dismiss / FocusLost / empty results /            ▲          │
//!              deferred close fired                             └──────────┘
//!                                                      Navigate* / Confirm
//! ```
//!
//! Losing focus while the pointer is over the result list does not close the
//! dropdown right away: a deferred close is armed instead, so that a click on
//! a result is not pre-empted. Moving the pointer back onto the list cancels
//! it; leaving the list again re-arms it.
//!
//! # Examples
//!
//! ```
//! use fuzzpick::matcher::NucleoEngine;
//! use fuzzpick::widget::{Autocomplete, Intent};
//!
//! let candidates = vec!["apple".to_string(), "banana".to_string(), "grape".to_string()];
//! let mut widget = Autocomplete::new(NucleoEngine::new(), candidates);
//!
//! widget.apply(Intent::query("ap"));
//! assert!(widget.state().is_open());
//! assert_eq!(widget.state().highlighted(), Some(0));
//!
//! let selection = widget.apply(Intent::Confirm(None)).selection.unwrap();
//! assert_eq!(selection.candidate, "apple");
//! ```

mod intent;
mod machine;
mod state;
mod timer;

pub use intent::Intent;
pub use machine::{Autocomplete, Selection, Transition};
pub use state::{Phase, WidgetState};
pub use timer::{DEFAULT_GRACE_DELAY, DeferredClose};

//! Ratatui widgets for the autocomplete TUI
//!
//! Each widget is a pure function of the data it is handed.

mod help_bar;
mod result_list;
mod search_bar;
mod status_bar;

pub use help_bar::HelpBar;
pub use result_list::{ResultList, scroll_offset};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

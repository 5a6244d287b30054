//! Widget state snapshot
//!
//! `WidgetState` is what the view layer renders. Its fields are private;
//! only the state machine in this module tree can change them, and every
//! mutator keeps the invariants:
//!
//! - an open dropdown always has results
//! - a highlight always points into `results`
//! - closing drops both the results and the highlight

use crate::matcher::MatchResult;

/// Dropdown visibility, with the highlighted row while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open(Option<usize>),
}

/// State owned by one autocomplete widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    query: String,
    results: Vec<MatchResult>,
    is_open: bool,
    highlighted: Option<usize>,
    blur_pending: bool,
    pointer_over_list: bool,
}

impl WidgetState {
    /// Current input text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the current query, best first
    #[must_use]
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Whether the dropdown is visible
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Highlighted row, if any
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The result under the highlight
    #[must_use]
    pub fn highlighted_result(&self) -> Option<&MatchResult> {
        self.highlighted.and_then(|idx| self.results.get(idx))
    }

    /// Focus was lost and the dropdown has not been closed for it yet
    #[must_use]
    pub const fn is_blur_pending(&self) -> bool {
        self.blur_pending
    }

    /// Whether the pointer is over the result list
    #[must_use]
    pub const fn is_pointer_over_list(&self) -> bool {
        self.pointer_over_list
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_open {
            Phase::Open(self.highlighted)
        } else {
            Phase::Closed
        }
    }

    pub(super) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Replace the result set; the highlight is reset for the fresh results
    pub(super) fn set_results(&mut self, results: Vec<MatchResult>) {
        self.results = results;
        self.highlighted = None;
        if self.results.is_empty() {
            self.close();
        } else if self.is_open {
            self.highlighted = Some(0);
        }
    }

    /// Show the dropdown if there is anything to show
    ///
    /// Returns `true` if the dropdown went from closed to open.
    pub(super) fn open(&mut self) -> bool {
        if self.results.is_empty() {
            return false;
        }
        let was_open = self.is_open;
        self.is_open = true;
        if self.highlighted.is_none() {
            self.highlighted = Some(0);
        }
        !was_open
    }

    /// Hide the dropdown, dropping results and highlight
    ///
    /// Returns `true` if anything changed.
    pub(super) fn close(&mut self) -> bool {
        let changed = self.is_open || !self.results.is_empty() || self.highlighted.is_some();
        self.is_open = false;
        self.results.clear();
        self.highlighted = None;
        changed
    }

    pub(super) fn set_highlighted(&mut self, idx: usize) -> bool {
        if !self.is_open || idx >= self.results.len() || self.highlighted == Some(idx) {
            return false;
        }
        self.highlighted = Some(idx);
        true
    }

    pub(super) const fn set_blur_pending(&mut self, pending: bool) {
        self.blur_pending = pending;
    }

    pub(super) const fn set_pointer_over_list(&mut self, over: bool) {
        self.pointer_over_list = over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::results;

    #[test]
    fn test_default_is_closed() {
        let state = WidgetState::default();
        assert_eq!(state.phase(), Phase::Closed);
        assert!(state.query().is_empty());
        assert!(state.results().is_empty());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_open_requires_results() {
        let mut state = WidgetState::default();
        assert!(!state.open());
        assert!(!state.is_open());

        state.set_results(results(&["a", "b"]));
        assert!(state.open());
        assert_eq!(state.phase(), Phase::Open(Some(0)));

        // Already open
        assert!(!state.open());
    }

    #[test]
    fn test_close_clears_results_and_highlight() {
        let mut state = WidgetState::default();
        state.set_results(results(&["a", "b"]));
        state.open();
        state.set_highlighted(1);

        assert!(state.close());
        assert!(!state.is_open());
        assert!(state.results().is_empty());
        assert_eq!(state.highlighted(), None);
        assert!(!state.close());
    }

    #[test]
    fn test_empty_results_close() {
        let mut state = WidgetState::default();
        state.set_results(results(&["a"]));
        state.open();

        state.set_results(Vec::new());
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn test_highlight_bounds() {
        let mut state = WidgetState::default();
        state.set_results(results(&["a", "b"]));

        // Closed: highlight cannot be set
        assert!(!state.set_highlighted(0));

        state.open();
        assert!(state.set_highlighted(1));
        assert!(!state.set_highlighted(2));
        assert_eq!(state.highlighted(), Some(1));
        assert_eq!(state.highlighted_result().map(|r| r.candidate.as_str()), Some("b"));
    }
}

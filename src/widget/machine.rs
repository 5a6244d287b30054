//! The interaction state machine

use super::intent::Intent;
use super::state::WidgetState;
use super::timer::DeferredClose;
use crate::matcher::MatchEngine;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// A confirmed result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Row of the result in the dropdown
    pub position: usize,
    /// Position of the candidate in the dataset
    pub index: usize,
    /// The selected candidate
    pub candidate: String,
}

/// Outcome of applying one intent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether a new snapshot was published
    pub changed: bool,
    /// Selection fired by this transition
    pub selection: Option<Selection>,
}

/// Autocomplete widget core
///
/// Owns the widget state and the deferred-close timer. Every intent is
/// applied to a copy of the current state; if the copy differs, it is
/// published as a new [`Arc<WidgetState>`] snapshot, so a view can detect
/// changes by pointer comparison.
pub struct Autocomplete<E> {
    engine: E,
    candidates: Arc<[String]>,
    state: Arc<WidgetState>,
    timer: DeferredClose,
}

impl<E> std::fmt::Debug for Autocomplete<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("candidates", &self.candidates.len())
            .field("state", &self.state)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl<E: MatchEngine> Autocomplete<E> {
    /// Create a closed widget over a fixed candidate set
    #[must_use]
    pub fn new(engine: E, candidates: impl Into<Arc<[String]>>) -> Self {
        Self {
            engine,
            candidates: candidates.into(),
            state: Arc::new(WidgetState::default()),
            timer: DeferredClose::default(),
        }
    }

    /// Set the grace period used when focus is lost over the result list
    #[must_use]
    pub const fn with_grace_delay(mut self, delay: Duration) -> Self {
        self.timer = DeferredClose::new(delay);
        self
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Shared handle to the current snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<WidgetState> {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub const fn grace_delay(&self) -> Duration {
        self.timer.delay()
    }

    /// Whether a deferred close is armed
    #[must_use]
    pub const fn is_close_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// When the armed deferred close will fire
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Apply an intent at the current time
    pub fn apply(&mut self, intent: Intent) -> Transition {
        self.apply_at(intent, Instant::now())
    }

    /// Apply an intent as if it arrived at `now`
    pub fn apply_at(&mut self, intent: Intent, now: Instant) -> Transition {
        trace!(intent = intent.name(), "applying intent");
        let mut next = (*self.state).clone();
        let selection = self.transition(&mut next, intent, now);
        self.publish(next, selection)
    }

    /// Fire the deferred close if it is due at `now`
    pub fn tick(&mut self, now: Instant) -> Transition {
        if !self.timer.fire_if_due(now) {
            return Transition::default();
        }
        debug!("deferred close fired");
        let mut next = (*self.state).clone();
        next.close();
        self.publish(next, None)
    }

    fn publish(&mut self, next: WidgetState, selection: Option<Selection>) -> Transition {
        let changed = next != *self.state;
        if changed {
            if next.is_open() != self.state.is_open() {
                debug!(open = next.is_open(), results = next.results().len(), "dropdown toggled");
            }
            self.state = Arc::new(next);
        }
        Transition { changed, selection }
    }

    fn transition(&mut self, next: &mut WidgetState, intent: Intent, now: Instant) -> Option<Selection> {
        match intent {
            Intent::QueryChanged(query) => {
                let results = self.engine.search(&query, &self.candidates);
                next.set_query(query);
                next.set_results(results);
                next.open();
                None
            }
            Intent::FocusGained => {
                next.set_blur_pending(false);
                if self.timer.cancel() {
                    debug!("deferred close cancelled by focus");
                }
                next.open();
                None
            }
            Intent::FocusLost => {
                next.set_blur_pending(true);
                if next.is_pointer_over_list() {
                    if next.is_open() {
                        self.timer.arm(now);
                        debug!(delay_ms = self.timer.delay().as_millis(), "deferred close armed");
                    }
                } else {
                    self.timer.cancel();
                    next.close();
                }
                None
            }
            Intent::PointerEnteredList => {
                next.set_pointer_over_list(true);
                if next.is_open() && self.timer.cancel() {
                    debug!("deferred close cancelled by pointer");
                }
                None
            }
            Intent::PointerLeftList => {
                next.set_pointer_over_list(false);
                if next.is_blur_pending() && next.is_open() {
                    self.timer.arm(now);
                    debug!(delay_ms = self.timer.delay().as_millis(), "deferred close re-armed");
                }
                None
            }
            Intent::NavigatePrevious => {
                if let Some(idx) = next.highlighted()
                    && idx > 0
                {
                    next.set_highlighted(idx - 1);
                }
                None
            }
            Intent::NavigateNext => {
                if let Some(idx) = next.highlighted() {
                    next.set_highlighted(idx + 1);
                }
                None
            }
            Intent::Confirm(None) => {
                if !next.is_open() {
                    return None;
                }
                next.highlighted().and_then(|idx| Self::select(next, idx))
            }
            Intent::Confirm(Some(idx)) => {
                if !next.is_open() || idx >= next.results().len() {
                    return None;
                }
                next.set_highlighted(idx);
                Self::select(next, idx)
            }
            Intent::Dismiss => {
                self.timer.cancel();
                next.set_query(String::new());
                next.close();
                None
            }
        }
    }

    fn select(state: &WidgetState, position: usize) -> Option<Selection> {
        let result = state.results().get(position)?;
        info!(position, index = result.index, candidate = %result.candidate, "selected");
        Some(Selection {
            position,
            index: result.index,
            candidate: result.candidate.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::NucleoEngine;
    use crate::testing::MockEngine;
    use crate::widget::Phase;

    const GRACE: Duration = Duration::from_millis(500);

    fn fruits() -> Autocomplete<NucleoEngine> {
        let candidates: Vec<String> = ["apple", "banana", "grape"]
            .iter()
            .map(ToString::to_string)
            .collect();
        Autocomplete::new(NucleoEngine::new(), candidates).with_grace_delay(GRACE)
    }

    fn open_with(names: &[&str]) -> Autocomplete<MockEngine> {
        let mut widget = Autocomplete::new(MockEngine::returning(names), Vec::<String>::new())
            .with_grace_delay(GRACE);
        widget.apply(Intent::query("x"));
        assert!(widget.state().is_open());
        widget
    }

    #[test]
    fn test_initial_state() {
        let widget = fruits();
        assert_eq!(widget.state().phase(), Phase::Closed);
        assert!(widget.state().query().is_empty());
        assert!(!widget.is_close_pending());
    }

    #[test]
    fn test_query_opens_with_first_highlighted() {
        let mut widget = fruits();
        let t = widget.apply(Intent::query("ap"));

        assert!(t.changed);
        assert!(t.selection.is_none());
        let state = widget.state();
        assert_eq!(state.query(), "ap");
        assert!(state.is_open());
        assert_eq!(state.highlighted(), Some(0));
        assert_eq!(state.results()[0].candidate, "apple");
    }

    #[test]
    fn test_query_without_results_closes() {
        let mut widget = fruits();
        widget.apply(Intent::query("ap"));
        widget.apply(Intent::NavigateNext);

        widget.apply(Intent::query("zzz"));
        let state = widget.state();
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
        assert!(state.results().is_empty());
        assert_eq!(state.query(), "zzz");

        widget.apply(Intent::query(""));
        assert!(!widget.state().is_open());
    }

    #[test]
    fn test_new_results_reset_highlight() {
        let mut widget = open_with(&["a", "b", "c"]);
        widget.apply(Intent::NavigateNext);
        widget.apply(Intent::NavigateNext);
        assert_eq!(widget.state().highlighted(), Some(2));

        widget.apply(Intent::query("xy"));
        assert_eq!(widget.state().highlighted(), Some(0));
    }

    #[test]
    fn test_navigate_next_stops_at_last() {
        let mut widget = open_with(&["a", "b", "c"]);
        assert_eq!(widget.state().highlighted(), Some(0));

        widget.apply(Intent::NavigateNext);
        widget.apply(Intent::NavigateNext);
        assert_eq!(widget.state().highlighted(), Some(2));

        let t = widget.apply(Intent::NavigateNext);
        assert!(!t.changed);
        assert_eq!(widget.state().highlighted(), Some(2));
    }

    #[test]
    fn test_navigate_previous_stops_at_first() {
        let mut widget = open_with(&["a", "b", "c"]);
        widget.apply(Intent::NavigateNext);
        widget.apply(Intent::NavigatePrevious);
        assert_eq!(widget.state().highlighted(), Some(0));

        for _ in 0..3 {
            let t = widget.apply(Intent::NavigatePrevious);
            assert!(!t.changed);
        }
        assert_eq!(widget.state().highlighted(), Some(0));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let mut widget = fruits();
        assert!(!widget.apply(Intent::NavigateNext).changed);
        assert!(!widget.apply(Intent::NavigatePrevious).changed);
        assert_eq!(widget.state().highlighted(), None);
    }

    #[test]
    fn test_enter_selects_highlighted_and_stays_open() {
        let mut widget = open_with(&["a", "b", "c"]);
        widget.apply(Intent::NavigateNext);

        let t = widget.apply(Intent::Confirm(None));
        let selection = t.selection.unwrap();
        assert_eq!(selection.position, 1);
        assert_eq!(selection.candidate, "b");
        assert!(widget.state().is_open());
        assert_eq!(widget.state().highlighted(), Some(1));
    }

    #[test]
    fn test_click_highlights_and_selects() {
        let mut widget = open_with(&["a", "b", "c"]);

        let t = widget.apply(Intent::Confirm(Some(1)));
        assert!(t.changed);
        assert_eq!(t.selection.map(|s| s.candidate), Some("b".to_string()));
        assert_eq!(widget.state().highlighted(), Some(1));
        assert!(widget.state().is_open());
    }

    #[test]
    fn test_click_out_of_range_is_noop() {
        let mut widget = open_with(&["a", "b"]);
        let t = widget.apply(Intent::Confirm(Some(5)));
        assert_eq!(t, Transition::default());
        assert_eq!(widget.state().highlighted(), Some(0));
    }

    #[test]
    fn test_confirm_while_closed_is_noop() {
        let mut widget = fruits();
        assert_eq!(widget.apply(Intent::Confirm(None)), Transition::default());
        assert_eq!(widget.apply(Intent::Confirm(Some(0))), Transition::default());
    }

    #[test]
    fn test_selection_carries_dataset_index() {
        let mut widget = fruits();
        widget.apply(Intent::query("ap"));
        let selection = widget.apply(Intent::Confirm(Some(1))).selection.unwrap();

        assert_eq!(selection.candidate, "grape");
        assert_eq!(selection.index, 2);
        assert_eq!(selection.position, 1);
    }

    #[test]
    fn test_dismiss_resets_everything() {
        let mut widget = fruits();
        widget.apply(Intent::query("ap"));
        widget.apply(Intent::NavigateNext);

        widget.apply(Intent::Dismiss);
        let state = widget.state();
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);

        // From the closed state as well
        widget.apply(Intent::Dismiss);
        assert_eq!(widget.state().phase(), Phase::Closed);
        assert_eq!(widget.state().query(), "");
    }

    #[test]
    fn test_focus_lost_closes_immediately() {
        let mut widget = open_with(&["a", "b"]);
        widget.apply(Intent::FocusLost);

        assert!(!widget.state().is_open());
        assert!(widget.state().results().is_empty());
        assert!(widget.state().is_blur_pending());
        assert!(!widget.is_close_pending());
    }

    #[test]
    fn test_focus_gained_reopens_with_results() {
        let mut widget = open_with(&["a", "b"]);
        widget.apply(Intent::PointerEnteredList);
        widget.apply(Intent::FocusLost);
        assert!(widget.state().is_open());

        widget.apply(Intent::FocusGained);
        assert!(widget.state().is_open());
        assert!(!widget.state().is_blur_pending());
        assert!(!widget.is_close_pending());
    }

    #[test]
    fn test_focus_gained_without_results_stays_closed() {
        let mut widget = fruits();
        let t = widget.apply(Intent::FocusGained);
        assert!(!t.changed);
        assert!(!widget.state().is_open());
    }

    #[test]
    fn test_blur_over_list_defers_close() {
        let start = Instant::now();
        let mut widget = open_with(&["a", "b"]);
        widget.apply_at(Intent::PointerEnteredList, start);
        widget.apply_at(Intent::FocusLost, start);

        assert!(widget.state().is_open());
        assert_eq!(widget.next_deadline(), Some(start + GRACE));

        // Still open within the grace period
        assert!(!widget.tick(start + Duration::from_millis(499)).changed);
        assert!(widget.state().is_open());

        let t = widget.tick(start + GRACE);
        assert!(t.changed);
        assert!(!widget.state().is_open());
        assert!(widget.state().results().is_empty());
    }

    #[test]
    fn test_pointer_enter_cancels_deferred_close() {
        let start = Instant::now();
        let mut widget = open_with(&["a", "b"]);
        widget.apply_at(Intent::PointerEnteredList, start);
        widget.apply_at(Intent::FocusLost, start);

        widget.apply_at(Intent::PointerEnteredList, start + Duration::from_millis(100));
        assert!(!widget.is_close_pending());

        widget.tick(start + Duration::from_secs(2));
        assert!(widget.state().is_open());
    }

    #[test]
    fn test_pointer_leave_rearms_close() {
        let start = Instant::now();
        let mut widget = open_with(&["a", "b"]);
        widget.apply_at(Intent::PointerEnteredList, start);
        widget.apply_at(Intent::FocusLost, start);
        widget.apply_at(Intent::PointerEnteredList, start + Duration::from_millis(100));

        let left = start + Duration::from_millis(300);
        widget.apply_at(Intent::PointerLeftList, left);
        assert_eq!(widget.next_deadline(), Some(left + GRACE));

        // Re-arming replaces the deadline
        let left_again = start + Duration::from_millis(400);
        widget.apply_at(Intent::PointerLeftList, left_again);
        assert_eq!(widget.next_deadline(), Some(left_again + GRACE));

        assert!(!widget.tick(left + GRACE).changed);
        assert!(widget.tick(left_again + GRACE).changed);
        assert!(!widget.state().is_open());
    }

    #[test]
    fn test_pointer_leave_without_blur_keeps_open() {
        let mut widget = open_with(&["a"]);
        widget.apply(Intent::PointerEnteredList);
        widget.apply(Intent::PointerLeftList);

        assert!(!widget.is_close_pending());
        assert!(widget.state().is_open());
        assert!(!widget.state().is_pointer_over_list());
    }

    #[test]
    fn test_click_during_grace_period_selects() {
        let start = Instant::now();
        let mut widget = open_with(&["a", "b"]);
        widget.apply_at(Intent::PointerEnteredList, start);
        widget.apply_at(Intent::FocusLost, start);

        let t = widget.apply_at(Intent::Confirm(Some(1)), start + Duration::from_millis(50));
        assert_eq!(t.selection.map(|s| s.candidate), Some("b".to_string()));
    }

    #[test]
    fn test_dismiss_cancels_deferred_close() {
        let start = Instant::now();
        let mut widget = open_with(&["a"]);
        widget.apply_at(Intent::PointerEnteredList, start);
        widget.apply_at(Intent::FocusLost, start);
        widget.apply_at(Intent::Dismiss, start);

        assert!(!widget.is_close_pending());
    }

    #[test]
    fn test_snapshot_pointer_changes_only_on_change() {
        let mut widget = open_with(&["a", "b"]);
        let before = widget.snapshot();

        widget.apply(Intent::NavigatePrevious);
        assert!(Arc::ptr_eq(&before, &widget.snapshot()));

        widget.apply(Intent::NavigateNext);
        let after = widget.snapshot();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.highlighted(), Some(0));
        assert_eq!(after.highlighted(), Some(1));
    }

    #[test]
    fn test_engine_receives_query_and_candidates() {
        let candidates = vec!["one".to_string(), "two".to_string()];
        let mut widget = Autocomplete::new(MockEngine::returning(&["one"]), candidates);
        widget.apply(Intent::query("on"));
        widget.apply(Intent::query("one"));

        assert_eq!(widget.engine.queries(), &["on".to_string(), "one".to_string()]);
        assert_eq!(widget.engine.last_candidate_count(), Some(2));
    }
}

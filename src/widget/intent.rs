//! Semantic intents consumed by the state machine

/// A normalized UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The input text changed
    QueryChanged(String),
    /// Move the highlight one row up
    NavigatePrevious,
    /// Move the highlight one row down
    NavigateNext,
    /// Select a result: the highlighted one (`None`, keyboard) or the given row (click)
    Confirm(Option<usize>),
    /// Clear the query and close the dropdown
    Dismiss,
    /// The input gained focus
    FocusGained,
    /// The input lost focus
    FocusLost,
    /// The pointer moved onto the result list
    PointerEnteredList,
    /// The pointer moved off the result list
    PointerLeftList,
}

impl Intent {
    /// Convenience constructor for a query change
    #[must_use]
    pub fn query(text: impl Into<String>) -> Self {
        Self::QueryChanged(text.into())
    }

    /// Short name used in trace output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "query_changed",
            Self::NavigatePrevious => "navigate_previous",
            Self::NavigateNext => "navigate_next",
            Self::Confirm(None) => "confirm",
            Self::Confirm(Some(_)) => "confirm_at",
            Self::Dismiss => "dismiss",
            Self::FocusGained => "focus_gained",
            Self::FocusLost => "focus_lost",
            Self::PointerEnteredList => "pointer_entered_list",
            Self::PointerLeftList => "pointer_left_list",
        }
    }
}

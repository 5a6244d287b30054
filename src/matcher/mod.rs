//! Match engine abstraction
//!
//! The autocomplete widget never ranks candidates itself. It is handed a
//! [`MatchEngine`] at construction time and calls [`MatchEngine::search`]
//! once per query change. Engines are synchronous and infallible from the
//! widget's point of view.
//!
//! # Examples
//!
//! ```
//! use fuzzpick::matcher::{HighlightMarkers, MatchEngine, NucleoEngine, render_highlight};
//!
//! let candidates = vec!["apple".to_string(), "banana".to_string(), "grape".to_string()];
//! let mut engine = NucleoEngine::new();
//!
//! let results = engine.search("ap", &candidates);
//! assert_eq!(results[0].candidate, "apple");
//! assert_eq!(
//!     render_highlight(&results[0], &HighlightMarkers::default()),
//!     "<b>ap</b>ple"
//! );
//! ```

mod nucleo_engine;

pub use nucleo_engine::{CaseSensitivity, NucleoEngine};

/// Half-open range of matched characters within a candidate
///
/// Offsets count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// A scored, highlight-annotated candidate produced for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Position of the candidate in the dataset
    pub index: usize,
    /// The candidate text
    pub candidate: String,
    /// Relevance score, higher is better
    pub score: u32,
    /// Matched character ranges, sorted and non-overlapping
    pub spans: Vec<HighlightSpan>,
}

impl MatchResult {
    /// Check whether the character at `offset` was matched
    #[must_use]
    pub fn is_matched(&self, offset: usize) -> bool {
        self.spans.iter().any(|span| span.contains(offset))
    }

    /// Split the candidate into `(text, matched)` segments for rendering
    #[must_use]
    pub fn segments(&self) -> Vec<(String, bool)> {
        let mut segments: Vec<(String, bool)> = Vec::new();
        for (offset, c) in self.candidate.chars().enumerate() {
            let matched = self.is_matched(offset);
            match segments.last_mut() {
                Some((text, last)) if *last == matched => text.push(c),
                _ => segments.push((c.to_string(), matched)),
            }
        }
        segments
    }
}

/// Ranks candidates against a query
pub trait MatchEngine {
    /// Return the candidates matching `query`, best match first
    ///
    /// An empty query matches nothing.
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<MatchResult>;
}

impl<E: MatchEngine + ?Sized> MatchEngine for Box<E> {
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<MatchResult> {
        (**self).search(query, candidates)
    }
}

/// Markers wrapped around matched spans by [`render_highlight`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkers {
    pub open: String,
    pub close: String,
}

impl HighlightMarkers {
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for HighlightMarkers {
    fn default() -> Self {
        Self::new("<b>", "</b>")
    }
}

/// Render a result as markup with matched spans wrapped in `markers`
///
/// Candidate text is escaped so the output is safe to embed in markup;
/// the markers themselves are emitted verbatim.
#[must_use]
pub fn render_highlight(result: &MatchResult, markers: &HighlightMarkers) -> String {
    let mut out = String::with_capacity(result.candidate.len() + 8);
    for (text, matched) in result.segments() {
        if matched {
            out.push_str(&markers.open);
            escape_into(&text, &mut out);
            out.push_str(&markers.close);
        } else {
            escape_into(&text, &mut out);
        }
    }
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

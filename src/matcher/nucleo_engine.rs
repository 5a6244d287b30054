//! Nucleo-backed match engine

use super::{HighlightSpan, MatchEngine, MatchResult};
use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Default cap on the number of results returned per query
pub const DEFAULT_LIMIT: usize = 50;

/// Case sensitivity of the fuzzy pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Case-insensitive unless the query contains an uppercase letter
    #[default]
    Smart,
    /// Always case-insensitive
    Ignore,
    /// Always case-sensitive
    Respect,
}

impl From<CaseSensitivity> for CaseMatching {
    fn from(value: CaseSensitivity) -> Self {
        match value {
            CaseSensitivity::Smart => Self::Smart,
            CaseSensitivity::Ignore => Self::Ignore,
            CaseSensitivity::Respect => Self::Respect,
        }
    }
}

/// Fuzzy match engine using nucleo's pattern matcher
///
/// Reuses its matcher and scratch buffers across queries.
pub struct NucleoEngine {
    matcher: Matcher,
    case: CaseSensitivity,
    limit: usize,
    buf: Vec<char>,
    indices: Vec<u32>,
}

impl std::fmt::Debug for NucleoEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NucleoEngine")
            .field("case", &self.case)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl Default for NucleoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NucleoEngine {
    /// Create an engine with smart case and the default result limit
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            case: CaseSensitivity::Smart,
            limit: DEFAULT_LIMIT,
            buf: Vec::with_capacity(64),
            indices: Vec::with_capacity(16),
        }
    }

    /// Set case sensitivity
    #[must_use]
    pub const fn with_case(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }

    /// Cap the number of results; `0` disables the cap
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl MatchEngine for NucleoEngine {
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<MatchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            self.case.into(),
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut results: Vec<MatchResult> = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            self.indices.clear();
            let haystack = Utf32Str::new(candidate, &mut self.buf);
            let bytes = matches!(haystack, Utf32Str::Ascii(_));
            let Some(score) = pattern.indices(haystack, &mut self.matcher, &mut self.indices)
            else {
                continue;
            };

            // Multiple atoms can report overlapping, unordered indices
            self.indices.sort_unstable();
            self.indices.dedup();

            results.push(MatchResult {
                index,
                candidate: candidate.clone(),
                score,
                spans: matched_spans(candidate, &self.indices, bytes),
            });
        }

        results.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
        if self.limit > 0 {
            results.truncate(self.limit);
        }
        results
    }
}

/// Turn sorted nucleo match indices into `char` spans of `candidate`
///
/// Indices are byte offsets when `bytes` is set (nucleo matched the raw
/// bytes) and grapheme offsets otherwise. A matched unit highlights the
/// whole grapheme holding it, combining marks included.
fn matched_spans(candidate: &str, indices: &[u32], bytes: bool) -> Vec<HighlightSpan> {
    let mut pending = indices.iter().map(|&idx| idx as usize).peekable();
    let mut spans: Vec<HighlightSpan> = Vec::new();
    let mut offset = 0;

    for (unit, (byte_start, grapheme)) in candidate.grapheme_indices(true).enumerate() {
        let width = grapheme.chars().count();
        let unit_end = if bytes {
            byte_start + grapheme.len()
        } else {
            unit + 1
        };

        let mut hit = false;
        while pending.next_if(|&idx| idx < unit_end).is_some() {
            hit = true;
        }
        if hit {
            match spans.last_mut() {
                Some(span) if span.end == offset => span.end = offset + width,
                _ => spans.push(HighlightSpan::new(offset, offset + width)),
            }
        }
        offset += width;
    }
    spans
}

//! Testing utilities for fuzzpick
//!
//! Provides a scripted match engine so the state machine can be tested
//! without depending on real ranking.
//!
//! Only available when compiled with `cfg(test)`.

use crate::matcher::{HighlightSpan, MatchEngine, MatchResult};

/// Build results for the given candidates in order, each matched on its first char
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn results(names: &[&str]) -> Vec<MatchResult> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| MatchResult {
            index,
            candidate: (*name).to_string(),
            score: (names.len() - index) as u32,
            spans: vec![HighlightSpan::new(0, 1)],
        })
        .collect()
}

/// Match engine that returns a fixed result set for every non-empty query
///
/// Records each query it receives.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    results: Vec<MatchResult>,
    queries: Vec<String>,
    last_candidate_count: Option<usize>,
}

impl MockEngine {
    /// Engine answering every non-empty query with `names`
    #[must_use]
    pub fn returning(names: &[&str]) -> Self {
        Self {
            results: results(names),
            ..Self::default()
        }
    }

    /// Queries seen so far
    #[must_use]
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Size of the candidate set passed to the last search
    #[must_use]
    pub const fn last_candidate_count(&self) -> Option<usize> {
        self.last_candidate_count
    }
}

impl MatchEngine for MockEngine {
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<MatchResult> {
        self.queries.push(query.to_string());
        self.last_candidate_count = Some(candidates.len());
        if query.is_empty() {
            Vec::new()
        } else {
            self.results.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_engine() {
        let mut engine = MockEngine::returning(&["a", "b"]);
        assert!(engine.search("", &[]).is_empty());

        let found = engine.search("q", &[]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].candidate, "b");
        assert_eq!(engine.queries(), &["".to_string(), "q".to_string()]);
    }
}

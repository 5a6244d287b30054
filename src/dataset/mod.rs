//! Candidate datasets
//!
//! A dataset is loaded once at startup and handed to the widget as an
//! immutable, shared slice. Sources are a text file (one candidate per
//! line), stdin, or the built-in sample list.

mod error;

pub use error::DatasetError;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Candidates used when no dataset is supplied
pub const SAMPLE: &[&str] = &[
    "apple",
    "apricot",
    "avocado",
    "banana",
    "blackberry",
    "blueberry",
    "cantaloupe",
    "cherry",
    "coconut",
    "cranberry",
    "date",
    "dragonfruit",
    "elderberry",
    "fig",
    "gooseberry",
    "grape",
    "grapefruit",
    "guava",
    "honeydew",
    "jackfruit",
    "kiwi",
    "kumquat",
    "lemon",
    "lime",
    "lychee",
    "mango",
    "mulberry",
    "nectarine",
    "orange",
    "papaya",
    "passion fruit",
    "peach",
    "pear",
    "persimmon",
    "pineapple",
    "plum",
    "pomegranate",
    "quince",
    "raspberry",
    "strawberry",
    "tangerine",
    "watermelon",
];

/// Built-in sample candidates
#[must_use]
pub fn sample() -> Arc<[String]> {
    SAMPLE.iter().map(ToString::to_string).collect()
}

/// Parse candidates from text, one per line
///
/// Lines are trimmed; blank lines are skipped. Duplicates are kept, in
/// order, since the dataset is the caller's.
#[must_use]
pub fn parse(text: &str) -> Arc<[String]> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Load candidates from a file, or from stdin if `path` is `-`
///
/// # Errors
///
/// Returns `DatasetError` if the source cannot be read.
pub fn load(path: &Path) -> Result<Arc<[String]>> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(DatasetError::StdinError)?;
        return Ok(parse(&text));
    }

    let text = fs::read_to_string(path).map_err(|source| DatasetError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&text))
}

/// Load from `path` when given, otherwise fall back to the sample list
///
/// # Errors
///
/// Returns `DatasetError` if `path` is given and cannot be read.
pub fn load_or_sample(path: Option<&Path>) -> Result<Arc<[String]>> {
    path.map_or_else(|| Ok(sample()), load)
}

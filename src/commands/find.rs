//! Single ladder query
//!
//! Wraps `PathFinder::find` and tells apart the reasons a ladder can be empty.

use crate::core::{Word, WordStore};
use crate::error::Result;
use crate::search::PathFinder;

/// Why a query produced the ladder it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found,
    UnknownStart,
    UnknownEnd,
    Unreachable,
}

/// Result of one ladder query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResult<'a> {
    pub start: String,
    pub end: String,
    pub ladder: Vec<&'a str>,
    pub outcome: FindOutcome,
}

impl FindResult<'_> {
    /// Number of transformations in the ladder (words minus one)
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.ladder.len().checked_sub(1)
    }
}

/// Normalize user input the same way the dictionary loader does
///
/// # Errors
///
/// Returns `LadderError::InvalidWord` if the input is empty or contains
/// anything but ASCII letters.
pub fn normalize_query(input: &str) -> Result<String> {
    Ok(Word::new(input)?.into_string())
}

/// Find a ladder between two user-supplied words
///
/// # Errors
///
/// Returns `LadderError::InvalidWord` if either word cannot be normalized.
pub fn find_words<'a>(store: &'a WordStore, start: &str, end: &str) -> Result<FindResult<'a>> {
    let start = normalize_query(start)?;
    let end = normalize_query(end)?;

    let ladder = PathFinder::new(store).find(&start, &end);
    let outcome = if !ladder.is_empty() {
        FindOutcome::Found
    } else if !store.exists(&start) {
        FindOutcome::UnknownStart
    } else if !store.exists(&end) {
        FindOutcome::UnknownEnd
    } else {
        FindOutcome::Unreachable
    };

    Ok(FindResult {
        start,
        end,
        ladder,
        outcome,
    })
}

//! Word list loading utilities
//!
//! Normalizes raw dictionary text into `Word`s: one word per line, trimmed,
//! lowercased. Blank lines and entries with non-letters are skipped.

use crate::core::Word;
use crate::error::{LadderError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns the valid words in file order, skipping blank or invalid lines.
///
/// # Errors
///
/// Returns `LadderError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LadderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    debug!(path = %path.display(), count = words.len(), "loaded dictionary file");
    Ok(words)
}

/// Parse newline-separated dictionary text
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::DEMO_WORDS;
///
/// let words = words_from_slice(DEMO_WORDS);
/// assert_eq!(words.len(), DEMO_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

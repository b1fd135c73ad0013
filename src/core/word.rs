//! Dictionary word representation
//!
//! A Word is a normalized, lowercase ASCII token ready to become a graph node.

use std::fmt;
use thiserror::Error;

/// A normalized dictionary word
///
/// Words are trimmed and lowercased on construction. Only ASCII letters are
/// accepted, the same `a`-`z` alphabet the rules generate candidates from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - It contains anything other than an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("  Ladder\n").unwrap();
    /// assert_eq!(word.text(), "ladder");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("it's").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Consume the word, returning the owned string
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(word.text(), "ladder");
        assert_eq!(word.char_len(), 6);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CAT").unwrap().text(), "cat");
        assert_eq!(Word::new(" Dog\r\n").unwrap().text(), "dog");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   \n"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("it's"), Err(WordError::InvalidCharacter('\'')));
        assert_eq!(Word::new("ca7"), Err(WordError::InvalidCharacter('7')));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacter(' ')));
    }

    #[test]
    fn word_creation_rejects_non_ascii_letters() {
        assert_eq!(Word::new("über"), Err(WordError::InvalidCharacter('ü')));
        assert_eq!(Word::new("ÜBER"), Err(WordError::InvalidCharacter('Ü')));
    }

    #[test]
    fn word_display_and_as_ref() {
        let word = Word::new("cot").unwrap();
        assert_eq!(format!("{word}"), "cot");
        assert_eq!(word.as_ref(), "cot");
        assert_eq!(word.into_string(), "cot".to_string());
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("cat").unwrap(), Word::new("CAT").unwrap());
        assert_ne!(Word::new("cat").unwrap(), Word::new("cot").unwrap());
    }
}

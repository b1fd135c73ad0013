//! Word lists for building ladders
//!
//! Provides a small embedded demo dictionary plus loaders for custom files.

mod embedded;
pub mod loader;

pub use embedded::{DEMO_WORDS, DEMO_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_count_matches_const() {
        assert_eq!(DEMO_WORDS.len(), DEMO_WORDS_COUNT);
    }

    #[test]
    fn demo_words_are_valid() {
        for &word in DEMO_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn demo_words_are_distinct() {
        let unique: std::collections::HashSet<_> = DEMO_WORDS.iter().collect();
        assert_eq!(unique.len(), DEMO_WORDS.len());
    }

    #[test]
    fn demo_contains_classic_ladders() {
        for word in ["cat", "cot", "cog", "dog", "cold", "warm", "head", "tail"] {
            assert!(DEMO_WORDS.contains(&word), "missing '{word}'");
        }
    }
}

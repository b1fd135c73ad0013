//! Single-letter substitution

use super::rule::{ALPHABET, TransformationRule};

/// Replace the letter at any one position with a different letter
///
/// A word of length n yields `n * 25` candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstituteRule;

impl TransformationRule for SubstituteRule {
    fn name(&self) -> &'static str {
        "substitute"
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut out = Vec::with_capacity(chars.len() * (ALPHABET.len() - 1));

        for (i, &original) in chars.iter().enumerate() {
            let mut copy = chars.clone();
            for letter in ALPHABET.into_iter().filter(|&letter| letter != original) {
                copy[i] = letter;
                out.push(copy.iter().collect());
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordStore;

    #[test]
    fn candidate_count() {
        assert_eq!(SubstituteRule.candidates("cat").len(), 3 * 25);
        assert!(SubstituteRule.candidates("").is_empty());
    }

    #[test]
    fn candidates_change_exactly_one_letter() {
        for candidate in SubstituteRule.candidates("cat") {
            assert_eq!(candidate.len(), 3);
            let differing = candidate
                .chars()
                .zip("cat".chars())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 1, "{candidate} should differ in one place");
        }
    }

    #[test]
    fn candidates_never_include_source() {
        assert!(!SubstituteRule.candidates("cat").contains(&"cat".to_string()));
    }

    #[test]
    fn connects_single_letter_neighbors() {
        let mut store = WordStore::from_words(["cat", "bat", "bit"]);
        store.apply(&SubstituteRule);

        assert!(store.has_edge("cat", "bat"));
        assert!(store.has_edge("bat", "cat"));
        assert!(store.has_edge("bat", "bit"));
        assert!(!store.has_edge("cat", "bit"));
    }

    #[test]
    fn does_not_connect_different_lengths() {
        let mut store = WordStore::from_words(["at", "bat"]);
        assert_eq!(store.apply(&SubstituteRule), 0);
    }
}

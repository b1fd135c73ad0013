//! Single-letter insertion

use super::rule::{ALPHABET, TransformationRule};

/// Insert any letter at any position, including both ends
///
/// A word of length n yields `(n + 1) * 26` candidates. Different positions
/// can produce the same string ("at" -> "aat" twice); the store keeps one edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertRule;

impl TransformationRule for InsertRule {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut out = Vec::with_capacity((chars.len() + 1) * ALPHABET.len());

        for i in 0..=chars.len() {
            let (head, tail) = chars.split_at(i);
            for letter in ALPHABET {
                let candidate: String = head
                    .iter()
                    .copied()
                    .chain(std::iter::once(letter))
                    .chain(tail.iter().copied())
                    .collect();
                out.push(candidate);
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
        assert_eq!(InsertRule.candidates("at").len(), 3 * 26);
        assert_eq!(InsertRule.candidates("").len(), 26);
    }

    #[test]
    fn candidates_cover_every_position() {
        let candidates = InsertRule.candidates("at");
        assert!(candidates.contains(&"bat".to_string()));
        assert!(candidates.contains(&"art".to_string()));
        assert!(candidates.contains(&"ate".to_string()));
        assert!(candidates.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn connects_shorter_to_longer() {
        let mut store = WordStore::from_words(["at", "bat"]);
        store.apply(&InsertRule);

        assert!(store.has_edge("at", "bat"));
        // Insertion never shortens a word
        assert!(!store.has_edge("bat", "at"));
    }

    #[test]
    fn duplicate_candidates_yield_one_edge() {
        let mut store = WordStore::from_words(["at", "aat"]);
        assert_eq!(store.apply(&InsertRule), 1);
    }
}

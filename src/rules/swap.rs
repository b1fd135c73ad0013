//! Two-letter transposition

use super::rule::TransformationRule;

/// Exchange the letters at any two positions
///
/// Pairs holding the same letter are skipped because swapping them would
/// reproduce the source word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapRule;

impl TransformationRule for SwapRule {
    fn name(&self) -> &'static str {
        "swap"
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in (i + 1)..n {
                if chars[i] == chars[j] {
                    continue;
                }
                let mut copy = chars.clone();
                copy.swap(i, j);
                out.push(copy.into_iter().collect());
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
    fn candidate_count_distinct_letters() {
        // 4 * 3 / 2 pairs
        assert_eq!(SwapRule.candidates("abcd").len(), 6);
        assert!(SwapRule.candidates("a").is_empty());
    }

    #[test]
    fn equal_letters_are_skipped() {
        assert!(SwapRule.candidates("aa").is_empty());
        let candidates = SwapRule.candidates("see");
        assert_eq!(candidates, vec!["ese".to_string(), "ees".to_string()]);
        assert!(!candidates.contains(&"see".to_string()));
    }

    #[test]
    fn connects_transpositions() {
        let mut store = WordStore::from_words(["ab", "ba"]);
        store.apply(&SwapRule);

        assert!(store.has_edge("ab", "ba"));
        assert!(store.has_edge("ba", "ab"));
        assert!(!store.has_edge("ab", "ab"));
    }

    #[test]
    fn never_creates_self_loops() {
        let mut store = WordStore::from_words(["aa", "noon", "tot"]);
        assert_eq!(store.apply(&SwapRule), 0);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn non_adjacent_swap() {
        let mut store = WordStore::from_words(["tar", "rat"]);
        store.apply(&SwapRule);
        assert!(store.has_edge("tar", "rat"));
    }
}

//! Transformation rules
//!
//! Defines the `TransformationRule` trait and the runtime-selectable `RuleType`.

use super::{InsertRule, SubstituteRule, SwapRule};
use crate::core::{NodeId, WordStore};
use crate::error::LadderError;
use tracing::debug;

/// Letters rules may introduce into a word
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A single-step transformation between words
///
/// Implementors only generate candidate strings; `apply` decides which of
/// them become edges. Candidates must never equal the source word.
pub trait TransformationRule {
    /// Short lowercase identifier, as accepted by `RuleType::from_name`
    fn name(&self) -> &'static str;

    /// Every string one step away from `word` under this rule
    fn candidates(&self, word: &str) -> Vec<String>;

    /// Connect every word to each of its candidates that is itself a word
    ///
    /// The vocabulary is snapshotted before scanning, so one pass never
    /// iterates over words it did not start with. Returns the number of
    /// edges added.
    fn apply(&self, store: &mut WordStore) -> usize {
        let sources: Vec<(NodeId, String)> = store
            .iter()
            .map(|(id, word)| (id, word.to_string()))
            .collect();
        let mut added = 0;

        for (source, word) in sources {
            let targets: Vec<NodeId> = self
                .candidates(&word)
                .iter()
                .filter_map(|candidate| store.get(candidate))
                .collect();

            for target in targets {
                if store.connect_ids(source, target) {
                    added += 1;
                }
            }
        }

        debug!(rule = self.name(), added, "applied transformation rule");
        added
    }
}

/// Enum wrapper for all rule types
///
/// Allows runtime selection of rules while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    /// Replace one letter
    Substitute(SubstituteRule),
    /// Insert one letter
    Insert(InsertRule),
    /// Exchange two letters
    Swap(SwapRule),
}

impl TransformationRule for RuleType {
    fn name(&self) -> &'static str {
        match self {
            Self::Substitute(r) => r.name(),
            Self::Insert(r) => r.name(),
            Self::Swap(r) => r.name(),
        }
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        match self {
            Self::Substitute(r) => r.candidates(word),
            Self::Insert(r) => r.candidates(word),
            Self::Swap(r) => r.candidates(word),
        }
    }
}

impl RuleType {
    /// Create a rule from its name
    ///
    /// Supported names: "substitute" (alias "standard"), "insert" (alias
    /// "expand"), "swap". Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `LadderError::UnknownRule` for any other name.
    pub fn from_name(name: &str) -> Result<Self, LadderError> {
        match name.trim().to_lowercase().as_str() {
            "substitute" | "standard" => Ok(Self::Substitute(SubstituteRule)),
            "insert" | "expand" => Ok(Self::Insert(InsertRule)),
            "swap" => Ok(Self::Swap(SwapRule)),
            _ => Err(LadderError::UnknownRule(name.to_string())),
        }
    }

    /// All rules in their default application order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::Substitute(SubstituteRule),
            Self::Insert(InsertRule),
            Self::Swap(SwapRule),
        ]
    }
}

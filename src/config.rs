//! Run configuration
//!
//! Collects the dictionary source and the rule list chosen on the command
//! line into one value the build pipeline consumes.

use crate::core::Word;
use crate::error::{LadderError, Result};
use crate::rules::RuleType;
use crate::wordlists::DEMO_WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use std::fmt;
use std::path::PathBuf;

/// Where the vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The demo dictionary compiled into the binary
    Builtin,
    /// A text file with one word per line
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dictionary` argument
    ///
    /// "builtin" (or "demo") selects the embedded list; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "builtin" | "demo" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and normalize the words of this source
    ///
    /// # Errors
    /// Returns `LadderError::Io` if a file cannot be read and
    /// `LadderError::EmptyDictionary` if no usable word remains.
    pub fn load(&self) -> Result<Vec<Word>> {
        let words = match self {
            Self::Builtin => words_from_slice(DEMO_WORDS),
            Self::File(path) => load_from_file(path)?,
        };

        if words.is_empty() {
            return Err(LadderError::EmptyDictionary(self.to_string()));
        }
        Ok(words)
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for building a word graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderConfig {
    pub dictionary: DictionarySource,
    pub rules: Vec<RuleType>,
}

impl LadderConfig {
    /// Configuration using `dictionary` and every rule in default order
    #[must_use]
    pub fn new(dictionary: DictionarySource) -> Self {
        Self {
            dictionary,
            rules: RuleType::all().to_vec(),
        }
    }

    /// Build a configuration from raw CLI values
    ///
    /// An empty rule list selects every rule.
    ///
    /// # Errors
    /// Returns `LadderError::UnknownRule` for an unrecognized rule name.
    pub fn from_args<S: AsRef<str>>(dictionary: &str, rule_names: &[S]) -> Result<Self> {
        let mut config = Self::new(DictionarySource::from_arg(dictionary));

        if !rule_names.is_empty() {
            config.rules = rule_names
                .iter()
                .map(|name| RuleType::from_name(name.as_ref()))
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(config)
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self::new(DictionarySource::Builtin)
    }
}

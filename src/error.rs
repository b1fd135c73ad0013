//! Error types for the word ladder crate
//!
//! The graph and search core never fail; these errors belong to the edges of
//! the crate: loading dictionaries and interpreting configuration.

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dictionary or building a configuration
#[derive(Debug, Error)]
pub enum LadderError {
    /// The dictionary file could not be read
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary contained no usable words after normalization
    #[error("dictionary '{0}' contains no usable words")]
    EmptyDictionary(String),

    /// A rule name on the command line did not match any known rule
    #[error("unknown rule '{0}' (expected one of: substitute, insert, swap)")]
    UnknownRule(String),

    /// A word supplied by the user could not be normalized
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LadderError>;

//! Transformation rules that decide which words become neighbors
//!
//! Each rule is a small pure generator of candidate strings. Applying a rule
//! to a `WordStore` turns the candidates that are real words into edges.

mod insert;
pub mod rule;
mod substitute;
mod swap;

pub use insert::InsertRule;
pub use rule::{ALPHABET, RuleType, TransformationRule};
pub use substitute::SubstituteRule;
pub use swap::SwapRule;

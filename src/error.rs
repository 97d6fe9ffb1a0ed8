//! All kinds of errors in this crate.

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The automaton must have at least one cell.
    #[error("Size should be positive.")]
    InvalidSize,
    /// Rule numbers cannot be negative.
    #[error("Invalid rule: {0}. Rule numbers should be non-negative.")]
    InvalidRule(String),
    /// Rule numbers are limited to 64 bits, i.e. a window of 6 cells.
    #[error("Unsupported rule: {0}. Rules with more than 64 bits are not supported.")]
    UnsupportedRule(String),
    /// A neighborhood state that the rule table does not cover.
    #[error("No transition for neighborhood state {0}.")]
    MissingNeighborhoodState(u64),
    /// Cells can only be 0 or 1.
    #[error("Invalid cell at index {index}: {value}. Cells should be 0 or 1.")]
    InvalidCell { index: usize, value: u8 },
    /// The string is not a rule number.
    #[error("Unable to parse rule: {0:?}.")]
    ParseRule(String),
}

//! Error type for colour parsing

use thiserror::Error;

/// Error returned when a string matches none of the supported colour notations.
///
/// Callers keep their last valid colour; nothing else can go wrong while
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No hex, `rgb()`, `hsl()` or named-colour pattern matched
    #[error("unrecognized colour: {0:?}")]
    Unrecognized(String),
}

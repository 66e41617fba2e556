//! Error types for color parsing and lookup.

use thiserror::Error;

/// An error produced when a string cannot be turned into a [`Color`].
///
/// [`Color`]: crate::Color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a valid hex color code.
    #[error("invalid color code: {0}")]
    InvalidCode(String),

    /// No color with the given name exists.
    #[error("invalid color name: {0}")]
    InvalidName(String),
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;

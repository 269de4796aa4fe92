//! Error types for the passcode widget.
//!
//! Rejected keystrokes are not errors: a full field, a delete on an empty
//! field, or a validator refusal are silent no-ops. The variants here cover
//! configuration mistakes only.

/// Result type alias for passcode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cell count must be positive.
    #[error("Passcode length must be at least 1, got {0}")]
    InvalidLength(usize),

    /// A validator pattern failed to compile.
    #[error("Invalid validator pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Settings could not be parsed.
    #[error("Failed to parse passcode settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings could not be written.
    #[error("Failed to serialize passcode settings: {0}")]
    SerializeSettings(#[from] toml::ser::Error),
}

impl Error {
    /// Create a pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

//! Error types for formwire.

use derive_more::{Display, Error, From};

use crate::ValueKind;

/// Main error type for formwire operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The top-level value handed to the encoder is not a struct.
    #[display("form input must be a struct, got {kind}")]
    #[from(skip)]
    InvalidInputKind {
        /// Kind of the rejected value.
        #[error(not(source))]
        kind: ValueKind,
    },

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_urlencoded::ser::Error),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid input kind error.
    #[must_use]
    pub const fn invalid_input_kind(kind: ValueKind) -> Self {
        Self::InvalidInputKind { kind }
    }

    /// Returns `true` if the encoder rejected the input value.
    #[must_use]
    pub const fn is_invalid_input_kind(&self) -> bool {
        matches!(self, Self::InvalidInputKind { .. })
    }

    /// Returns the rejected kind if this is an invalid input error.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::InvalidInputKind { kind } => Some(*kind),
            Self::FormSerialization(_) => None,
        }
    }
}

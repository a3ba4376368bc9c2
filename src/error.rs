//! Literal error types.
//!
//! There are exactly two failure modes in this crate:
//! - [`LiteralError::InvalidKind`] — construction from an unsupported type;
//! - [`LiteralError::InvalidCast`] — a view that cannot be derived from the
//!   literal's value.
//!
//! Casts are pure, so a failed cast is final: the same accessor on the same
//! literal will never later succeed.

use thiserror::Error;

use crate::kind::LiteralKind;

/// Errors produced by literal construction and conversion.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// The source value's type is not one of the five supported kinds.
    ///
    /// Raised at construction only. Carries the rejected type's name.
    #[error("can't create literal from kind: {kind}")]
    InvalidKind { kind: String },

    /// The requested view cannot be derived from the literal's value.
    ///
    /// Carries the literal's string form and the target kind. This is an
    /// expected, recoverable condition; callers branch on the `Result`.
    #[error("can't cast literal '{from}' to {to}")]
    InvalidCast { from: String, to: LiteralKind },
}

impl LiteralError {
    /// Create an invalid-kind error
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidKind { kind: kind.into() }
    }

    /// Create an invalid-cast error
    pub fn invalid_cast(from: impl Into<String>, to: LiteralKind) -> Self {
        Self::InvalidCast {
            from: from.into(),
            to,
        }
    }

    /// Get error code for monitoring
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidKind { .. } => "LITERAL_INVALID_KIND",
            Self::InvalidCast { .. } => "LITERAL_INVALID_CAST",
        }
    }
}

/// Result type alias for literal operations
pub type LiteralResult<T> = core::result::Result<T, LiteralError>;

//! Literal kinds.
//!
//! `LiteralKind` is the lightweight classification for [`Literal`]: exactly
//! the five kinds a literal can be constructed from. It doubles as the target
//! name carried by cast errors.
//!
//! [`Literal`]: crate::Literal

use core::fmt::{Display, Formatter};

/// The kind of value a [`Literal`](crate::Literal) was constructed from.
///
/// This is a closed set: a literal is never anything other than one of these
/// five kinds, and the kind is fixed at construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralKind {
    /// Signed 64-bit integer
    Integer,
    /// IEEE 754 double-precision float
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Stored error value
    Error,
}

impl LiteralKind {
    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Error => "error",
        }
    }
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

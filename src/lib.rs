//! Dynamically-typed literal values with lazy, memoized conversions.
//!
//! A [`Literal`] is a single value that may transparently be viewed as an
//! integer, a float, a boolean, a string, or an error. It is built for code
//! where data arrives untyped (parsed text, rule engines, tabular data) and
//! different consumers need to interpret the same value differently without
//! paying the parsing cost more than once: every conversion is computed on
//! first request and its outcome, success or definitive failure, is
//! remembered for the lifetime of the literal.
//!
//! ```
//! use dynlit::{Literal, LiteralKind};
//!
//! let lit = Literal::text("6.27");
//! assert_eq!(lit.kind(), LiteralKind::String);
//! assert_eq!(lit.to_float().unwrap(), 6.27);
//! assert!(lit.to_int().is_err()); // not an integer; this outcome is final
//! assert_eq!(lit.as_str(), "6.27");
//! ```
//!
//! Conversions are exact: a float becomes an integer only when nothing is
//! lost (`6.0` does, `6.6` and `1e19` do not), and an integer becomes a
//! float only when f64 represents it exactly. The string form is canonical
//! and locale-free, and round-trips through the numeric views.

#![warn(clippy::all)]

mod convert;
mod error;
mod kind;
mod literal;

pub use error::{LiteralError, LiteralResult};
pub use kind::LiteralKind;
pub use literal::Literal;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Literal, LiteralError, LiteralKind, LiteralResult};
}

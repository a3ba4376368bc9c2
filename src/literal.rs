//! The `Literal` type: one value, many views.
//!
//! A literal is constructed from exactly one of five source kinds (integer,
//! float, string, boolean, error) and can afterwards be viewed as any of
//! them. Each view is computed at most once: the outcome, success or
//! definitive failure, is memoized in a write-once slot for the lifetime of
//! the literal, so repeated queries are O(1) after the first.
//!
//! The slots are `OnceCell`s, which makes the cache invisible to callers:
//! two literals built from the same source value are equal and behave
//! identically regardless of which views have already been asked for. It
//! also makes `Literal` freely shareable across threads; concurrent readers
//! race only on who computes a view first, never on its value.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::trace;

use crate::convert;
use crate::error::{LiteralError, LiteralResult};
use crate::kind::LiteralKind;

/// The value a literal was constructed from. Closed set, fixed for life.
#[derive(Debug, Clone)]
enum Source {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Error(Arc<dyn StdError + Send + Sync>),
}

/// A dynamically-typed literal value with lazy, memoized conversions.
///
/// ```
/// use dynlit::Literal;
///
/// let lit = Literal::text("6.27");
/// assert_eq!(lit.as_str(), "6.27");
/// assert_eq!(lit.to_float().unwrap(), 6.27);
/// assert!(lit.to_int().is_err()); // "6.27" is not an integer
/// ```
#[derive(Debug, Clone)]
pub struct Literal {
    source: Source,
    // Write-once conversion slots. Unset = not yet attempted;
    // Some(Some(v)) = proven convertible; Some(None) = proven impossible.
    int_slot: OnceCell<Option<i64>>,
    float_slot: OnceCell<Option<f64>>,
    bool_slot: OnceCell<Option<bool>>,
    // Canonical string form for non-text sources. Rendering is total, so
    // this slot has no failure state.
    text_slot: OnceCell<String>,
}

impl Literal {
    fn from_source(source: Source) -> Self {
        let lit = Self {
            source,
            int_slot: OnceCell::new(),
            float_slot: OnceCell::new(),
            bool_slot: OnceCell::new(),
            text_slot: OnceCell::new(),
        };
        // Pre-prove what the source kind already tells us. An error value
        // can never be viewed numerically or as a boolean, so those slots
        // are proven impossible up front; no parsing is ever attempted.
        match &lit.source {
            Source::Int(i) => {
                let _ = lit.int_slot.set(Some(*i));
            }
            Source::Float(f) => {
                let _ = lit.float_slot.set(Some(*f));
            }
            Source::Bool(b) => {
                let _ = lit.bool_slot.set(Some(*b));
            }
            Source::Error(_) => {
                let _ = lit.int_slot.set(None);
                let _ = lit.float_slot.set(None);
                let _ = lit.bool_slot.set(None);
            }
            Source::Text(_) => {}
        }
        lit
    }

    // ==================== Constructors ====================

    /// Create a literal from a value of runtime-determined type.
    ///
    /// This is the open-world entry point: it accepts the native integer
    /// types, `f32`/`f64`, `bool`, `String` and `&'static str`, and fails
    /// with [`LiteralError::InvalidKind`] (naming the rejected type) for
    /// anything else. Error values enter through [`Literal::from_error`].
    ///
    /// ```
    /// use dynlit::Literal;
    ///
    /// assert_eq!(Literal::new(6).unwrap().to_int().unwrap(), 6);
    /// assert!(Literal::new('x').is_err());
    /// ```
    pub fn new<T: Any>(value: T) -> LiteralResult<Self> {
        let any: &dyn Any = &value;
        if let Some(&v) = any.downcast_ref::<i64>() {
            return Ok(Self::integer(v));
        }
        if let Some(&v) = any.downcast_ref::<i32>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<i16>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<i8>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<u8>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<u16>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<u32>() {
            return Ok(Self::integer(i64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<u64>() {
            return i64::try_from(v)
                .map(Self::integer)
                .map_err(|_| LiteralError::invalid_kind("u64 (exceeds i64 range)"));
        }
        if let Some(&v) = any.downcast_ref::<f64>() {
            return Ok(Self::float(v));
        }
        if let Some(&v) = any.downcast_ref::<f32>() {
            return Ok(Self::float(f64::from(v)));
        }
        if let Some(&v) = any.downcast_ref::<bool>() {
            return Ok(Self::boolean(v));
        }
        if let Some(v) = any.downcast_ref::<String>() {
            return Ok(Self::text(v.clone()));
        }
        if let Some(&v) = any.downcast_ref::<&str>() {
            return Ok(Self::text(v));
        }
        Err(LiteralError::invalid_kind(std::any::type_name::<T>()))
    }

    /// Create an integer literal
    pub fn integer(v: i64) -> Self {
        Self::from_source(Source::Int(v))
    }

    /// Create a float literal
    pub fn float(v: f64) -> Self {
        Self::from_source(Source::Float(v))
    }

    /// Create a boolean literal
    pub fn boolean(v: bool) -> Self {
        Self::from_source(Source::Bool(v))
    }

    /// Create a string literal. Never fails: a string is always a valid
    /// source, whatever it contains.
    pub fn text(v: impl Into<String>) -> Self {
        Self::from_source(Source::Text(v.into()))
    }

    /// Create a literal holding an error value.
    ///
    /// The numeric and boolean views of such a literal fail immediately;
    /// its string form is the error's message.
    pub fn from_error(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::from_source(Source::Error(Arc::from(err.into())))
    }

    // ==================== Type queries ====================

    /// Get the kind this literal was constructed from
    #[inline]
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        match &self.source {
            Source::Int(_) => LiteralKind::Integer,
            Source::Float(_) => LiteralKind::Float,
            Source::Text(_) => LiteralKind::String,
            Source::Bool(_) => LiteralKind::Boolean,
            Source::Error(_) => LiteralKind::Error,
        }
    }

    /// Check if this literal holds an error value
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.source, Source::Error(_))
    }

    /// Get the integer if this literal is natively an integer.
    ///
    /// Unlike [`to_int`](Self::to_int) this never converts.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self.source {
            Source::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Get the float if this literal is natively a float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.source {
            Source::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Get the boolean if this literal is natively a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.source {
            Source::Bool(b) => Some(b),
            _ => None,
        }
    }

    // ==================== Views (to_*) ====================

    /// View this literal as an i64.
    ///
    /// A native float converts only if it round-trips exactly (no fractional
    /// part, within i64 range). Everything else parses the string form as
    /// base-10. The outcome is memoized either way: a failed cast stays
    /// failed.
    pub fn to_int(&self) -> LiteralResult<i64> {
        match self.int_slot.get_or_init(|| self.prove_int()) {
            Some(v) => Ok(*v),
            None => Err(LiteralError::invalid_cast(self.as_str(), LiteralKind::Integer)),
        }
    }

    /// View this literal as an f64.
    ///
    /// A native integer converts only if f64 represents it exactly (guards
    /// against precision loss above 2^53). Everything else parses the string
    /// form. Memoized.
    pub fn to_float(&self) -> LiteralResult<f64> {
        match self.float_slot.get_or_init(|| self.prove_float()) {
            Some(v) => Ok(*v),
            None => Err(LiteralError::invalid_cast(self.as_str(), LiteralKind::Float)),
        }
    }

    /// View this literal as a boolean.
    ///
    /// An already-proven integer view decides it as `int != 0`, else an
    /// already-proven float view as `float != 0.0`, else the string form is
    /// matched against the case-insensitive lexicon
    /// `{true, t, 1}` / `{false, f, 0}`. Preferring a resolved numeric slot
    /// over re-parsing text means the *path* taken can depend on which view
    /// was requested first, though the resulting boolean does not:
    ///
    /// ```
    /// use dynlit::Literal;
    ///
    /// let lit = Literal::text("2.5");
    /// lit.to_float().unwrap();
    /// assert!(lit.to_bool().unwrap()); // 2.5 != 0.0
    /// ```
    pub fn to_bool(&self) -> LiteralResult<bool> {
        match self.bool_slot.get_or_init(|| self.prove_bool()) {
            Some(v) => Ok(*v),
            None => Err(LiteralError::invalid_cast(self.as_str(), LiteralKind::Boolean)),
        }
    }

    /// Get the canonical string form. Total: every literal has exactly one.
    ///
    /// Integers render as plain decimal; floats as the shortest decimal that
    /// round-trips (locale-free, `.` separator, no grouping); booleans as
    /// `"true"`/`"false"`; error literals as the error's message.
    pub fn as_str(&self) -> &str {
        match &self.source {
            Source::Text(s) => s,
            Source::Bool(true) => "true",
            Source::Bool(false) => "false",
            Source::Int(i) => self.text_slot.get_or_init(|| i.to_string()),
            Source::Float(f) => self.text_slot.get_or_init(|| f.to_string()),
            Source::Error(e) => self.text_slot.get_or_init(|| e.to_string()),
        }
    }

    /// Get the stored error, if this literal was constructed from one.
    ///
    /// Performs no conversion; non-error literals return `None`.
    #[must_use]
    pub fn err(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.source {
            Source::Error(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    // ==================== Slot computation ====================

    fn prove_int(&self) -> Option<i64> {
        let proved = match &self.source {
            Source::Float(f) => convert::float_to_int_exact(*f),
            _ => self.as_str().parse::<i64>().ok(),
        };
        if proved.is_none() {
            trace!(literal = self.as_str(), "int view proven impossible");
        }
        proved
    }

    fn prove_float(&self) -> Option<f64> {
        let proved = match &self.source {
            Source::Int(i) => convert::int_to_float_exact(*i),
            _ => self.as_str().parse::<f64>().ok(),
        };
        if proved.is_none() {
            trace!(literal = self.as_str(), "float view proven impossible");
        }
        proved
    }

    fn prove_bool(&self) -> Option<bool> {
        // Prefer a numeric view that has already been resolved over parsing
        // the text again. Slots only move Unknown -> proven, so the value
        // read here is stable.
        if let Some(&Some(i)) = self.int_slot.get() {
            return Some(i != 0);
        }
        if let Some(&Some(f)) = self.float_slot.get() {
            return Some(f != 0.0);
        }
        let proved = convert::parse_bool(self.as_str());
        if proved.is_none() {
            trace!(literal = self.as_str(), "bool view proven impossible");
        }
        proved
    }
}

/// Literals compare by source value only; the conversion slots are an
/// invisible optimization. Error literals compare by message.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Source::Int(a), Source::Int(b)) => a == b,
            (Source::Float(a), Source::Float(b)) => a == b,
            (Source::Text(a), Source::Text(b)) => a == b,
            (Source::Bool(a), Source::Bool(b)) => a == b,
            (Source::Error(a), Source::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

// No Eq: float literals inherit NaN != NaN.

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Literal {
    /// The empty string literal
    fn default() -> Self {
        Self::text("")
    }
}

// ==================== From implementations ====================

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<i16> for Literal {
    fn from(v: i16) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<i8> for Literal {
    fn from(v: i8) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<u8> for Literal {
    fn from(v: u8) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<u16> for Literal {
    fn from(v: u16) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<u32> for Literal {
    fn from(v: u32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<f32> for Literal {
    fn from(v: f32) -> Self {
        Self::float(f64::from(v))
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Self::text(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl TryFrom<u64> for Literal {
    type Error = LiteralError;

    fn try_from(v: u64) -> LiteralResult<Self> {
        i64::try_from(v)
            .map(Self::integer)
            .map_err(|_| LiteralError::invalid_kind("u64 (exceeds i64 range)"))
    }
}

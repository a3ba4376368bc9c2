//! Pure conversion algorithms shared by the literal accessors.
//!
//! Both numeric directions are *exact*: a conversion is accepted only when
//! the reverse conversion recovers the original value bit-for-bit. The
//! boundary needs care: `i64::MAX as f64` rounds up to 2^63, so a naive
//! round-trip check through a saturating cast accepts values it should not.

/// 2^63 as f64. Exact, since it is a power of two.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert a float to i64, accepting only if the float has no fractional
/// part and lies within i64 range.
///
/// NaN and the infinities fail the range comparison; `-0.0` converts to `0`.
pub(crate) fn float_to_int_exact(f: f64) -> Option<i64> {
    // Range check first: `as` saturates, and a saturated value can pass the
    // round-trip comparison at the 2^63 boundary.
    if f >= -I64_BOUND && f < I64_BOUND {
        let i = f as i64;
        if i as f64 == f {
            return Some(i);
        }
    }
    None
}

/// Convert an i64 to f64, accepting only if the integer is exactly
/// representable (no precision loss above 2^53).
pub(crate) fn int_to_float_exact(i: i64) -> Option<f64> {
    let f = i as f64;
    // `i64::MAX as f64` is 2^63, outside i64 range; reject before the
    // saturating reverse cast can alias it back to i64::MAX.
    if f >= -I64_BOUND && f < I64_BOUND && f as i64 == i {
        Some(f)
    } else {
        None
    }
}

/// Parse the boolean lexicon: truthy `{true, t, 1}`, falsy `{false, f, 0}`,
/// matched case-insensitively. Anything else is not a boolean.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("t") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("f") || s == "0" {
        Some(false)
    } else {
        None
    }
}

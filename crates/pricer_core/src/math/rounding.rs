//! Decimal rounding for published quotes.
//!
//! Rounding uses half-away-from-zero semantics (`f64::round`), so
//! `0.125 → 0.13` and `-0.125 → -0.13` when the scaled value is exactly
//! representable. Values that are not exactly representable in binary round
//! according to their stored value.

/// Rounds `value` to `places` decimal places, half away from zero.
///
/// Non-finite inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use pricer_core::math::rounding::round_to_decimals;
///
/// assert_eq!(round_to_decimals(1.25, 1), 1.3);
/// assert_eq!(round_to_decimals(-1.25, 1), -1.3);
/// assert_eq!(round_to_decimals(1234.5678, 0), 1235.0);
/// ```
#[inline]
pub fn round_to_decimals(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Rounds `value` to 2 decimal places, half away from zero.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    round_to_decimals(value, 2)
}

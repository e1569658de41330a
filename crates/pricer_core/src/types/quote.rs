//! Quote and curve value types.
//!
//! - [`OptionPair`]: unrounded (call, put) value produced by one model run
//! - [`PriceQuote`]: one published sweep point, rounded to cents
//! - [`PriceCurve`]: strike-ascending sequence of quotes

use super::error::PricingError;
use crate::math::rounding::round_to_cents;

/// Call and put values for one strike, as produced by a pricing model.
///
/// Values are not clamped: Monte Carlo and lattice noise may push a deep
/// out-of-the-money leg marginally below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPair {
    /// Call value.
    pub call: f64,
    /// Put value.
    pub put: f64,
}

impl OptionPair {
    /// Creates a new pair.
    #[inline]
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }

    /// Returns `true` if both legs are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.call.is_finite() && self.put.is_finite()
    }

    /// Scales both legs by `factor` (used for discounting).
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            call: self.call * factor,
            put: self.put * factor,
        }
    }
}

/// A single point of a price curve.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionPair, PriceQuote};
///
/// let quote = PriceQuote::from_pair(105.0, OptionPair::new(6.0449, 5.926));
/// assert_eq!(quote.call, 6.04);
/// assert_eq!(quote.put, 5.93);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceQuote {
    /// Strike, rounded to 2 decimal places.
    pub strike: f64,
    /// Call price, rounded to 2 decimal places.
    pub call: f64,
    /// Put price, rounded to 2 decimal places.
    pub put: f64,
}

impl PriceQuote {
    /// Creates a quote, rounding every field to 2 decimal places independently.
    #[inline]
    pub fn rounded(strike: f64, call: f64, put: f64) -> Self {
        Self {
            strike: round_to_cents(strike),
            call: round_to_cents(call),
            put: round_to_cents(put),
        }
    }

    /// Creates a quote from a model output pair.
    #[inline]
    pub fn from_pair(strike: f64, pair: OptionPair) -> Self {
        Self::rounded(strike, pair.call, pair.put)
    }
}

/// Strike-ascending sequence of [`PriceQuote`]s.
///
/// Built once per sweep and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{PriceCurve, PriceQuote};
///
/// let curve = PriceCurve::new(vec![
///     PriceQuote::rounded(90.0, 14.2, 0.5),
///     PriceQuote::rounded(100.0, 6.1, 2.2),
/// ])
/// .unwrap();
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.strikes(), vec![90.0, 100.0]);
///
/// // Out-of-order strikes are rejected.
/// assert!(PriceCurve::new(vec![
///     PriceQuote::rounded(100.0, 6.1, 2.2),
///     PriceQuote::rounded(90.0, 14.2, 0.5),
/// ])
/// .is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriceCurve {
    points: Vec<PriceQuote>,
}

impl PriceCurve {
    /// Creates a curve, checking that strikes are strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` on the first strike that does not
    /// exceed its predecessor.
    pub fn new(points: Vec<PriceQuote>) -> Result<Self, PricingError> {
        for window in points.windows(2) {
            if window[1].strike <= window[0].strike {
                return Err(PricingError::invalid_input(
                    "strike",
                    format!(
                        "grid is not strictly ascending after rounding: {} follows {}",
                        window[1].strike, window[0].strike
                    ),
                ));
            }
        }
        Ok(Self { points })
    }

    /// Returns the quotes in ascending strike order.
    #[inline]
    pub fn points(&self) -> &[PriceQuote] {
        &self.points
    }

    /// Number of quotes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no quotes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the quotes.
    pub fn iter(&self) -> std::slice::Iter<'_, PriceQuote> {
        self.points.iter()
    }

    /// Returns the strikes in order.
    pub fn strikes(&self) -> Vec<f64> {
        self.points.iter().map(|q| q.strike).collect()
    }

    /// Looks up the quote at `strike` (exact match on the rounded strike).
    pub fn at_strike(&self, strike: f64) -> Option<&PriceQuote> {
        let key = round_to_cents(strike);
        self.points.iter().find(|q| q.strike == key)
    }

    /// Consumes the curve and returns its quotes.
    pub fn into_points(self) -> Vec<PriceQuote> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PriceCurve {
    type Item = &'a PriceQuote;
    type IntoIter = std::slice::Iter<'a, PriceQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_pair_scaled() {
        let pair = OptionPair::new(10.0, 4.0).scaled(0.5);
        assert_eq!(pair, OptionPair::new(5.0, 2.0));
    }

    #[test]
    fn test_option_pair_is_finite() {
        assert!(OptionPair::new(1.0, 2.0).is_finite());
        assert!(!OptionPair::new(f64::NAN, 2.0).is_finite());
        assert!(!OptionPair::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_quote_rounds_each_field_independently() {
        let quote = PriceQuote::rounded(52.499, 47.5651, -0.004);
        assert_eq!(quote.strike, 52.5);
        assert_eq!(quote.call, 47.57);
        assert_eq!(quote.put, 0.0);
    }

    #[test]
    fn test_curve_rejects_duplicate_strikes() {
        let result = PriceCurve::new(vec![
            PriceQuote::rounded(0.01, 0.0, 0.0),
            PriceQuote::rounded(0.01, 0.0, 0.0),
        ]);
        assert_eq!(result.unwrap_err().field(), Some("strike"));
    }

    #[test]
    fn test_curve_at_strike() {
        let curve = PriceCurve::new(vec![
            PriceQuote::rounded(50.0, 52.44, 0.0),
            PriceQuote::rounded(55.0, 47.68, 0.0),
        ])
        .unwrap();
        assert_eq!(curve.at_strike(55.0).map(|q| q.call), Some(47.68));
        assert!(curve.at_strike(60.0).is_none());
    }

    #[test]
    fn test_empty_curve() {
        let curve = PriceCurve::default();
        assert!(curve.is_empty());
        assert_eq!(curve.iter().count(), 0);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_curve_serialises_as_list() {
            let curve = PriceCurve::new(vec![PriceQuote::rounded(100.0, 9.11, 4.02)]).unwrap();
            let json = serde_json::to_string(&curve).unwrap();
            assert_eq!(json, r#"[{"strike":100.0,"call":9.11,"put":4.02}]"#);
        }
    }
}

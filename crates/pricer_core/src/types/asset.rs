//! Asset domain labelling.
//!
//! Equity and FX options share one engine: the underlying level is a spot
//! price for equities and an exchange rate for FX. The domain only changes
//! how inputs and results are labelled.

use std::fmt;

use super::currency_pair::CurrencyPair;

/// Asset domain of the underlying.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{AssetDomain, CurrencyPair};
///
/// let equity = AssetDomain::Equity;
/// assert_eq!(equity.level_label(), "spot price");
///
/// let fx = AssetDomain::Fx(CurrencyPair::default());
/// assert_eq!(fx.level_label(), "exchange rate");
/// assert_eq!(fx.to_string(), "FX USD/JPY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssetDomain {
    /// Equity underlying; the level is a spot price.
    #[default]
    Equity,
    /// FX underlying; the level is the BASE/QUOTE exchange rate.
    Fx(CurrencyPair),
}

impl AssetDomain {
    /// Label for the underlying level.
    pub fn level_label(&self) -> &'static str {
        match self {
            AssetDomain::Equity => "spot price",
            AssetDomain::Fx(_) => "exchange rate",
        }
    }

    /// Label for the observed range (low/high).
    pub fn range_label(&self) -> &'static str {
        match self {
            AssetDomain::Equity => "observed price range",
            AssetDomain::Fx(_) => "observed exchange-rate range",
        }
    }

    /// Currency pair for FX underlyings.
    pub fn currency_pair(&self) -> Option<CurrencyPair> {
        match self {
            AssetDomain::Equity => None,
            AssetDomain::Fx(pair) => Some(*pair),
        }
    }
}

impl fmt::Display for AssetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetDomain::Equity => write!(f, "Equity"),
            AssetDomain::Fx(pair) => write!(f, "FX {}", pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;

    #[test]
    fn test_equity_has_no_pair() {
        assert_eq!(AssetDomain::Equity.currency_pair(), None);
        assert_eq!(AssetDomain::default(), AssetDomain::Equity);
    }

    #[test]
    fn test_fx_labels() {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let domain = AssetDomain::Fx(pair);
        assert_eq!(domain.currency_pair(), Some(pair));
        assert_eq!(domain.range_label(), "observed exchange-rate range");
        assert_eq!(domain.to_string(), "FX EUR/USD");
    }
}

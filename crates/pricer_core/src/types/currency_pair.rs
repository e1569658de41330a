//! Currency pair labels for FX underlyings.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair: CurrencyPair = "usd/jpy".parse().unwrap();
//! assert_eq!(pair.base(), Currency::USD);
//! assert_eq!(pair.quote(), Currency::JPY);
//! assert_eq!(pair.to_string(), "USD/JPY");
//!
//! let inverted = pair.invert();
//! assert_eq!(inverted.to_string(), "JPY/USD");
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// A BASE/QUOTE currency pair: 1 unit of BASE costs `level` units of QUOTE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    base: Currency,
    quote: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and quote are the same.
    pub fn new(base: Currency, quote: Currency) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the inverted pair (QUOTE/BASE).
    #[inline]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }
}

impl Default for CurrencyPair {
    /// USD/JPY, the pair the FX form opens with.
    fn default() -> Self {
        Self {
            base: Currency::USD,
            quote: Currency::JPY,
        }
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses `BASE/QUOTE` (also accepts `BASEQUOTE` as six letters).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let trimmed = s.trim();
        let (base, quote) = match trimmed.split_once('/') {
            Some(parts) => parts,
            None if trimmed.len() == 6 && trimmed.is_ascii() => trimmed.split_at(3),
            None => return Err(CurrencyError::ParseError(s.to_string())),
        };
        Self::new(base.parse()?, quote.parse()?)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

//! Core value, error, and labelling types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and currency parsing
//! - `validation`: Scalar checks that map failures to `PricingError::InvalidInput`
//! - `market`: The market snapshot every vanilla model consumes
//! - `quote`: Option pairs, rounded quotes, and strike-ascending curves
//! - `cancel`: Cooperative cancellation token
//! - `currency`, `currency_pair`, `asset`: Equity/FX labelling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod asset;
pub mod cancel;
pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod market;
pub mod quote;
pub mod validation;

// Re-export commonly used types at module level
pub use asset::AssetDomain;
pub use cancel::CancellationToken;
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, PricingError};
pub use market::VanillaMarket;
pub use quote::{OptionPair, PriceCurve, PriceQuote};

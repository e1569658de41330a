//! The capability every vanilla pricing model provides.
//!
//! Closed-form, lattice, and simulation models all map a market snapshot
//! and a strike to a (call, put) pair. Dispatch over the concrete models is
//! enum-based in the pricing layer; this trait is the contract each variant
//! fulfils.

use crate::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};

/// Prices a European call and put for one strike.
///
/// # Contract
///
/// - Inputs have already passed validation (`VanillaMarket::new`, positive strike)
/// - Degenerate divisions are reported as `PricingError::NumericDegeneracy`,
///   never as NaN/∞ inside the returned pair
/// - Long-running implementations poll `cancel` and return
///   `PricingError::Cancelled` once it fires
///
/// # Examples
///
/// ```
/// use pricer_core::traits::priceable::PairPricer;
/// use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};
///
/// /// Prices at intrinsic value.
/// struct Intrinsic;
///
/// impl PairPricer for Intrinsic {
///     fn price_pair(
///         &self,
///         market: &VanillaMarket,
///         strike: f64,
///         _cancel: &CancellationToken,
///     ) -> Result<OptionPair, PricingError> {
///         Ok(OptionPair::new(
///             (market.level - strike).max(0.0),
///             (strike - market.level).max(0.0),
///         ))
///     }
/// }
///
/// let market = VanillaMarket::new(100.0, 1.0, 0.0, 0.2).unwrap();
/// let pair = Intrinsic.price_pair(&market, 90.0, &CancellationToken::new()).unwrap();
/// assert_eq!(pair, OptionPair::new(10.0, 0.0));
/// ```
pub trait PairPricer {
    /// Prices the call and put struck at `strike`.
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError>;
}

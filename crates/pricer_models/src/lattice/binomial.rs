//! Cox–Ross–Rubinstein binomial lattice.
//!
//! ```text
//! dt = T / n
//! u  = exp(σ√dt),  d = 1/u
//! p  = (exp(r·dt) − d) / (u − d)
//! ```
//!
//! Terminal node `i` (counting down-moves) sits at `L·u^(n−i)·d^i`. Values
//! are rolled back with `V = e^(−r·dt)·(p·V_up + (1−p)·V_down)`; there is no
//! early-exercise comparison at interior nodes.

use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};

use crate::analytical::AnalyticalError;

const MODEL: &str = "binomial lattice";

/// Default number of time steps.
pub const DEFAULT_TREE_STEPS: usize = 100;

/// Upper bound on time steps (the rollback is O(n²)).
pub const MAX_TREE_STEPS: usize = 20_000;

/// Cox–Ross–Rubinstein binomial tree for European calls and puts.
///
/// # Examples
/// ```
/// use pricer_core::traits::priceable::PairPricer;
/// use pricer_core::types::{CancellationToken, VanillaMarket};
/// use pricer_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(200).unwrap();
/// let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
/// let pair = tree.price_pair(&market, 100.0, &CancellationToken::new()).unwrap();
/// assert!((pair.call - 10.45).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
}

impl BinomialTree {
    /// Creates a tree with `steps` time steps.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidSteps` if `steps` is zero or above
    /// [`MAX_TREE_STEPS`].
    pub fn new(steps: usize) -> Result<Self, AnalyticalError> {
        if steps == 0 || steps > MAX_TREE_STEPS {
            return Err(AnalyticalError::InvalidSteps { steps });
        }
        Ok(Self { steps })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices the call and put, returning `(call, put)`.
    ///
    /// # Errors
    /// - `AnalyticalError::ZeroVolatility` when u == d
    /// - `AnalyticalError::NonFinite` when `p` or a root value is not finite
    pub fn price(
        &self,
        level: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<(f64, f64), AnalyticalError> {
        let n = self.steps;
        let dt = maturity / n as f64;
        let u = (volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        if u == d {
            return Err(AnalyticalError::ZeroVolatility { model: MODEL });
        }

        let p = ((rate * dt).exp() - d) / (u - d);
        if !p.is_finite() {
            return Err(AnalyticalError::NonFinite {
                context: "binomial up-probability",
            });
        }
        let disc = (-rate * dt).exp();
        let disc_p = disc * p;
        let disc_q = disc * (1.0 - p);

        // Node i carries i down-moves: L·u^(n−i)·d^i
        let mut calls = Vec::with_capacity(n + 1);
        let mut puts = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let node = level * u.powi((n - i) as i32) * d.powi(i as i32);
            calls.push((node - strike).max(0.0));
            puts.push((strike - node).max(0.0));
        }

        for step in (0..n).rev() {
            for i in 0..=step {
                calls[i] = disc_p * calls[i] + disc_q * calls[i + 1];
                puts[i] = disc_p * puts[i] + disc_q * puts[i + 1];
            }
        }

        let (call, put) = (calls[0], puts[0]);
        if !(call.is_finite() && put.is_finite()) {
            return Err(AnalyticalError::NonFinite {
                context: "binomial root value",
            });
        }
        Ok((call, put))
    }
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self {
            steps: DEFAULT_TREE_STEPS,
        }
    }
}

impl PairPricer for BinomialTree {
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        _cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError> {
        let (call, put) = self.price(
            market.level,
            strike,
            market.maturity,
            market.rate,
            market.volatility,
        )?;
        Ok(OptionPair::new(call, put))
    }
}

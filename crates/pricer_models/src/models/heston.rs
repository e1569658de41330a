//! Heston stochastic-volatility dynamics.
//!
//! ```text
//! dL = r·L·dt + √v·L·dW₁
//! dv = κ(θ − v)·dt + ξ·√v·dW₂,   d⟨W₁, W₂⟩ = ρ·dt
//! ```
//!
//! Discretised with Euler full truncation: the level step uses the variance
//! at the start of the step, and the variance is floored at zero after each
//! update so `√(v·dt)` is always defined.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Heston parameter validation errors.
///
/// # Variants
/// - `InvalidV0`: Initial variance negative or non-finite
/// - `InvalidKappa`: Mean-reversion speed non-finite
/// - `InvalidTheta`: Long-run variance negative or non-finite
/// - `InvalidXi`: Vol-of-vol negative or non-finite
/// - `InvalidRho`: Correlation outside [-1, 1]
///
/// # Examples
/// ```
/// use pricer_models::models::heston::HestonError;
///
/// let err = HestonError::InvalidRho(1.5);
/// assert!(format!("{}", err).contains("1.5"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HestonError {
    /// Invalid initial variance (must be non-negative).
    #[error("Invalid initial variance: v0 = {0}")]
    InvalidV0(f64),

    /// Invalid mean-reversion speed (must be finite).
    #[error("Invalid mean-reversion speed: kappa = {0}")]
    InvalidKappa(f64),

    /// Invalid long-run variance (must be non-negative).
    #[error("Invalid long-run variance: theta = {0}")]
    InvalidTheta(f64),

    /// Invalid vol-of-vol (must be non-negative).
    #[error("Invalid vol-of-vol: xi = {0}")]
    InvalidXi(f64),

    /// Invalid correlation (must lie in [-1, 1]).
    #[error("Invalid correlation: rho = {0}")]
    InvalidRho(f64),
}

impl HestonError {
    /// Input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            HestonError::InvalidV0(_) => "initial_variance",
            HestonError::InvalidKappa(_) => "mean_reversion",
            HestonError::InvalidTheta(_) => "long_run_variance",
            HestonError::InvalidXi(_) => "vol_of_vol",
            HestonError::InvalidRho(_) => "correlation",
        }
    }
}

impl From<HestonError> for PricingError {
    fn from(err: HestonError) -> Self {
        PricingError::invalid_input(err.field(), err.to_string())
    }
}

/// Heston model parameters.
///
/// # Fields
///
/// * `v0` - Initial variance (v0 >= 0)
/// * `kappa` - Mean-reversion speed (finite)
/// * `theta` - Long-run variance (theta >= 0)
/// * `xi` - Volatility of variance (xi >= 0)
/// * `rho` - Correlation between level and variance shocks (-1 <= rho <= 1)
///
/// # Examples
///
/// ```
/// use pricer_models::models::HestonParams;
///
/// let params = HestonParams::new(0.04, 2.0, 0.04, 0.3, -0.7);
/// assert!(params.is_ok());
///
/// assert!(HestonParams::new(0.04, 2.0, 0.04, 0.3, -1.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HestonParams {
    v0: f64,
    kappa: f64,
    theta: f64,
    xi: f64,
    rho: f64,
    /// √(1 − ρ²), cached for the correlated draw
    rho_complement: f64,
}

impl HestonParams {
    /// Creates validated Heston parameters.
    ///
    /// # Errors
    /// The first failing parameter, checked in argument order.
    pub fn new(v0: f64, kappa: f64, theta: f64, xi: f64, rho: f64) -> Result<Self, HestonError> {
        if !(v0.is_finite() && v0 >= 0.0) {
            return Err(HestonError::InvalidV0(v0));
        }
        if !kappa.is_finite() {
            return Err(HestonError::InvalidKappa(kappa));
        }
        if !(theta.is_finite() && theta >= 0.0) {
            return Err(HestonError::InvalidTheta(theta));
        }
        if !(xi.is_finite() && xi >= 0.0) {
            return Err(HestonError::InvalidXi(xi));
        }
        if !(-1.0..=1.0).contains(&rho) {
            return Err(HestonError::InvalidRho(rho));
        }

        Ok(Self {
            v0,
            kappa,
            theta,
            xi,
            rho,
            rho_complement: (1.0 - rho * rho).sqrt(),
        })
    }

    /// Initial variance.
    #[inline]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Mean-reversion speed.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run variance.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Volatility of variance.
    #[inline]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Level/variance correlation.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Starting state for a path at `level`.
    #[inline]
    pub fn initial_state(&self, level: f64) -> HestonState {
        HestonState {
            level,
            variance: self.v0,
        }
    }

    /// Correlates an independent draw with the level shock:
    /// `ρ·z_level + √(1 − ρ²)·z_indep`.
    #[inline]
    pub fn correlate(&self, z_level: f64, z_indep: f64) -> f64 {
        self.rho * z_level + self.rho_complement * z_indep
    }

    /// Advances `state` by one Euler full-truncation step.
    ///
    /// `z_level` and `z_indep` are independent standard normals.
    #[inline]
    pub fn euler_step(&self, state: &mut HestonState, rate: f64, dt: f64, z_level: f64, z_indep: f64) {
        let v = state.variance;
        let vol_sqrt_dt = (v * dt).sqrt();
        let z_variance = self.correlate(z_level, z_indep);

        state.level *= ((rate - 0.5 * v) * dt + vol_sqrt_dt * z_level).exp();
        state.variance =
            (v + self.kappa * (self.theta - v) * dt + self.xi * vol_sqrt_dt * z_variance).max(0.0);
    }
}

impl Default for HestonParams {
    /// v0 = 0.04, κ = 2, θ = 0.04, ξ = 0.3, ρ = −0.7
    fn default() -> Self {
        Self {
            v0: 0.04,
            kappa: 2.0,
            theta: 0.04,
            xi: 0.3,
            rho: -0.7,
            rho_complement: (1.0_f64 - (-0.7_f64) * (-0.7_f64)).sqrt(),
        }
    }
}

/// Level and instantaneous variance along one simulated path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HestonState {
    /// Underlying level
    pub level: f64,
    /// Instantaneous variance (never negative)
    pub variance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Validation Tests
    // ==========================================================

    #[test]
    fn test_default_matches_new() {
        let params = HestonParams::new(0.04, 2.0, 0.04, 0.3, -0.7).unwrap();
        assert_eq!(params, HestonParams::default());
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(HestonParams::new(0.0, 0.0, 0.0, 0.0, -1.0).is_ok());
        assert!(HestonParams::new(0.0, -1.0, 0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            HestonParams::new(-0.01, 2.0, 0.04, 0.3, 0.0),
            Err(HestonError::InvalidV0(-0.01))
        );
        assert_eq!(
            HestonParams::new(0.04, f64::NAN, 0.04, 0.3, 0.0).unwrap_err().field(),
            "mean_reversion"
        );
        assert_eq!(
            HestonParams::new(0.04, 2.0, -0.04, 0.3, 0.0),
            Err(HestonError::InvalidTheta(-0.04))
        );
        assert_eq!(
            HestonParams::new(0.04, 2.0, 0.04, -0.3, 0.0),
            Err(HestonError::InvalidXi(-0.3))
        );
        assert!(HestonParams::new(0.04, 2.0, 0.04, 0.3, f64::NAN).is_err());
    }

    #[test]
    fn test_error_to_pricing_error() {
        let err: PricingError = HestonError::InvalidRho(2.0).into();
        assert_eq!(err.field(), Some("correlation"));
    }

    // ==========================================================
    // Dynamics Tests
    // ==========================================================

    #[test]
    fn test_correlate_extremes() {
        let perfect = HestonParams::new(0.04, 2.0, 0.04, 0.3, 1.0).unwrap();
        assert_relative_eq!(perfect.correlate(0.7, -1.1), 0.7, epsilon = 1e-15);

        let independent = HestonParams::new(0.04, 2.0, 0.04, 0.3, 0.0).unwrap();
        assert_relative_eq!(independent.correlate(0.7, -1.1), -1.1, epsilon = 1e-15);
    }

    #[test]
    fn test_euler_step_by_hand() {
        let params = HestonParams::new(0.04, 2.0, 0.05, 0.3, -0.5).unwrap();
        let mut state = params.initial_state(100.0);
        let (dt, rate, z1, z2) = (0.01, 0.03, 0.4, -0.2);
        params.euler_step(&mut state, rate, dt, z1, z2);

        let sq = (0.04_f64 * dt).sqrt();
        let zv = -0.5 * z1 + (0.75_f64).sqrt() * z2;
        let level = 100.0 * ((rate - 0.02) * dt + sq * z1).exp();
        let variance = 0.04 + 2.0 * (0.05 - 0.04) * dt + 0.3 * sq * zv;
        assert_relative_eq!(state.level, level, epsilon = 1e-12);
        assert_relative_eq!(state.variance, variance, epsilon = 1e-15);
    }

    #[test]
    fn test_full_truncation_floors_variance() {
        let params = HestonParams::new(0.0001, 0.0, 0.0001, 5.0, 0.0).unwrap();
        let mut state = params.initial_state(100.0);
        params.euler_step(&mut state, 0.0, 0.1, 0.0, -10.0);
        assert_eq!(state.variance, 0.0);

        // Zero variance: the level only accrues the rate
        let before = state.level;
        params.euler_step(&mut state, 0.05, 0.1, 3.0, 3.0);
        assert_relative_eq!(state.level, before * (0.005_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vol_of_vol_keeps_variance_at_theta() {
        let params = HestonParams::new(0.04, 2.0, 0.04, 0.0, -0.7).unwrap();
        let mut state = params.initial_state(100.0);
        for _ in 0..50 {
            params.euler_step(&mut state, 0.05, 0.02, 1.0, -1.0);
        }
        assert_relative_eq!(state.variance, 0.04, epsilon = 1e-15);
    }
}

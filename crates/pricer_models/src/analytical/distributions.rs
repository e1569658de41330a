//! Standard normal cumulative distribution function.
//!
//! `norm_cdf` uses the Zelen–Severo polynomial approximation
//! (Abramowitz & Stegun 26.2.17) and is generic over `T: Float`.

use num_traits::Float;

/// Density scale used by the Zelen–Severo approximation (1/√(2π) to 7 places).
const ZS_DENSITY: f64 = 0.398_942_3;

/// Zelen–Severo `p` constant.
const ZS_P: f64 = 0.231_641_9;

/// Zelen–Severo polynomial coefficients b1..b5.
const ZS_B: [f64; 5] = [0.319_381_5, -0.356_563_8, 1.781_478, -1.821_256, 1.330_274];

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) with the fixed-coefficient
/// Zelen–Severo approximation:
///
/// ```text
/// t    = 1 / (1 + 0.2316419·|x|)
/// d    = 0.3989423·exp(−x²/2)
/// tail = d·t·(b1 + t(b2 + t(b3 + t(b4 + t·b5))))
/// Φ(x) = 1 − tail  for x > 0,   tail otherwise
/// ```
///
/// # Accuracy
/// Absolute error below 1e-7 over the real line; the result stays in
/// [0, 1] and `Φ(x) + Φ(−x) = 1` holds exactly for `x ≠ 0`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-6);
///
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let p = T::from(ZS_P).unwrap();
    let density = T::from(ZS_DENSITY).unwrap();
    let half = T::from(0.5).unwrap();
    let [b1, b2, b3, b4, b5] = ZS_B.map(|b| T::from(b).unwrap());

    let t = one / (one + p * x.abs());
    let d = density * (-x * x * half).exp();

    // Horner's method for the polynomial in t
    let poly = b1 + t * (b2 + t * (b3 + t * (b4 + t * b5)));
    let tail = d * t * poly;

    if x > T::zero() {
        one - tail
    } else {
        tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(0.35_f64), 0.6368306511756191, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        let cdf_large_pos = norm_cdf(8.0_f64);
        assert!(cdf_large_pos > 0.999999);
        assert!(cdf_large_pos <= 1.0);

        let cdf_large_neg = norm_cdf(-8.0_f64);
        assert!(cdf_large_neg < 0.000001);
        assert!(cdf_large_neg >= 0.0);

        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(40.0_f64), 1.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-40..=40).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for x in (-100..=100).map(|i| i as f64 * 0.1) {
            let result = norm_cdf(x);
            assert!((0.0..=1.0).contains(&result), "CDF out of [0, 1] at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_norm_cdf_slope_is_the_density() {
        // Numerical derivative of the approximated CDF tracks the exact PDF
        let h = 1e-3;
        for x in [-2.0_f64, -1.0, -0.3, 0.4, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            let density = (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
            assert_relative_eq!(numerical_derivative, density, epsilon = 1e-4);
        }
    }
}

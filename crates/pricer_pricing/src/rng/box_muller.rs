//! Box–Muller standard normal sampler.
//!
//! Two independent uniforms `u1 ∈ (0, 1]`, `u2 ∈ [0, 1)` map to
//!
//! ```text
//! z = √(−2·ln u1) · cos(2π·u2)
//! ```
//!
//! Only the cosine branch is used, so every normal consumes two uniforms.
//! The sine partner is discarded rather than cached, which keeps the
//! sampler stateless and the draw count per path fixed.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::TAU;

/// Standard normal distribution sampled with the Box–Muller transform.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::BoxMuller;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let z: f64 = BoxMuller.sample(&mut rng);
/// assert!(z.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxMuller;

impl BoxMuller {
    /// Applies the transform to a pair of uniforms.
    ///
    /// `u1` must lie in (0, 1]; `u1 = 0` would take the log of zero.
    #[inline]
    pub fn transform(u1: f64, u2: f64) -> f64 {
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

impl Distribution<f64> for BoxMuller {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen::<f64>() is in [0, 1); reflect so the log argument is never 0
        let u1 = 1.0 - rng.gen::<f64>();
        let u2 = rng.gen::<f64>();
        Self::transform(u1, u2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_transform_known_points() {
        // u1 = 1 gives ln 1 = 0, so z = 0 whatever u2 is
        assert_eq!(BoxMuller::transform(1.0, 0.3), 0.0);

        // u2 = 0: z = √(−2 ln u1)
        let u1 = (-0.5_f64).exp();
        assert_relative_eq!(BoxMuller::transform(u1, 0.0), 1.0, epsilon = 1e-12);

        // u2 = 0.5: cos π = −1
        assert_relative_eq!(BoxMuller::transform(u1, 0.5), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_consumes_two_uniforms() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        let z: f64 = BoxMuller.sample(&mut a);
        let u1 = 1.0 - b.gen::<f64>();
        let u2 = b.gen::<f64>();
        assert_eq!(z, BoxMuller::transform(u1, u2));

        // Both generators are now aligned
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_samples_are_finite() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let z: f64 = BoxMuller.sample(&mut rng);
            assert!(z.is_finite());
        }
    }
}

//! Strike grids expressed as ratios of the underlying level.

use pricer_core::math::rounding::round_to_cents;
use pricer_core::types::validation::require_positive;
use pricer_core::types::PricingError;

/// Tolerance absorbing float drift in `(upper − lower) / step`.
const COUNT_EPSILON: f64 = 1e-9;

/// Largest number of strikes a grid may hold.
pub const MAX_GRID_POINTS: usize = 10_000;

/// Strike grid `level·(lower + step·i)` for `i = 0..point_count()`.
///
/// The default grid runs from 0.5× to 1.5× the level in 0.05× steps,
/// giving 21 points. Strikes are generated by index, never by repeated
/// addition, so accumulated error cannot add or drop a point.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::sweep::StrikeGrid;
///
/// let grid = StrikeGrid::default();
/// assert_eq!(grid.point_count(), 21);
///
/// let strikes = grid.strikes(110.0).unwrap();
/// assert_eq!(strikes.first(), Some(&55.0));
/// assert_eq!(strikes.last(), Some(&165.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrikeGrid {
    lower_ratio: f64,
    upper_ratio: f64,
    step_ratio: f64,
}

impl StrikeGrid {
    /// Creates a grid from level ratios.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` if a ratio is non-positive or
    /// non-finite, if `lower > upper`, or if the step is so small that
    /// the grid would exceed [`MAX_GRID_POINTS`] (`step_ratio`).
    pub fn new(lower_ratio: f64, upper_ratio: f64, step_ratio: f64) -> Result<Self, PricingError> {
        let lower_ratio = require_positive("lower_ratio", lower_ratio)?;
        let upper_ratio = require_positive("upper_ratio", upper_ratio)?;
        let step_ratio = require_positive("step_ratio", step_ratio)?;
        if lower_ratio > upper_ratio {
            return Err(PricingError::invalid_input(
                "upper_ratio",
                format!("must be at least lower_ratio {}, got {}", lower_ratio, upper_ratio),
            ));
        }
        let intervals = ((upper_ratio - lower_ratio) / step_ratio + COUNT_EPSILON).floor();
        if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as f64 {
            return Err(PricingError::invalid_input(
                "step_ratio",
                format!(
                    "{} gives more than {} strikes between {} and {}",
                    step_ratio, MAX_GRID_POINTS, lower_ratio, upper_ratio
                ),
            ));
        }
        Ok(Self {
            lower_ratio,
            upper_ratio,
            step_ratio,
        })
    }

    /// Lowest strike as a multiple of the level.
    #[inline]
    pub fn lower_ratio(&self) -> f64 {
        self.lower_ratio
    }

    /// Highest strike as a multiple of the level.
    #[inline]
    pub fn upper_ratio(&self) -> f64 {
        self.upper_ratio
    }

    /// Strike spacing as a multiple of the level.
    #[inline]
    pub fn step_ratio(&self) -> f64 {
        self.step_ratio
    }

    /// Number of grid points, both ends included; never above
    /// [`MAX_GRID_POINTS`].
    pub fn point_count(&self) -> usize {
        ((self.upper_ratio - self.lower_ratio) / self.step_ratio + COUNT_EPSILON).floor() as usize
            + 1
    }

    /// Ratio of point `index` to the level.
    #[inline]
    pub fn ratio(&self, index: usize) -> f64 {
        self.lower_ratio + self.step_ratio * index as f64
    }

    /// Strikes for `level`, each rounded to 2 decimal places.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` (`strike`) if a rounded strike is not
    /// positive, which happens for levels below about 0.01.
    pub fn strikes(&self, level: f64) -> Result<Vec<f64>, PricingError> {
        (0..self.point_count())
            .map(|index| {
                let strike = round_to_cents(level * self.ratio(index));
                if strike > 0.0 {
                    Ok(strike)
                } else {
                    Err(PricingError::invalid_input(
                        "strike",
                        format!(
                            "rounds to {} at level {}; the level is too small for a cent grid",
                            strike, level
                        ),
                    ))
                }
            })
            .collect()
    }
}

impl Default for StrikeGrid {
    fn default() -> Self {
        Self {
            lower_ratio: 0.5,
            upper_ratio: 1.5,
            step_ratio: 0.05,
        }
    }
}

//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Zelen–Severo approximation of the standard normal CDF
//! - Black–Scholes closed form for calls and puts
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for the distribution functions
//! - **Explicit degeneracy**: σ = 0 and T = 0 are reported, not approximated

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;

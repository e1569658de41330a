//! Volatility estimation from observed price ranges.
//!
//! This module provides:
//! - `estimate_range_volatility`: Parkinson-style σ from a low/high excursion

pub mod range;

pub use range::estimate_range_volatility;

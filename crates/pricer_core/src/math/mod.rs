//! Numeric helpers shared across layers.
//!
//! - `rounding`: Decimal rounding with half-away-from-zero semantics for published quotes

pub mod rounding;

//! # Pricer Models (L2: Business Logic)
//!
//! Deterministic pricing formulas and model dynamics.
//!
//! This crate provides:
//! - Range-based volatility estimation (`volatility`)
//! - Zelen–Severo normal CDF and the Black–Scholes closed form (`analytical`)
//! - Cox–Ross–Rubinstein binomial lattice (`lattice`)
//! - GBM terminal sampling and Heston Euler dynamics (`models`)
//!
//! Simulation engines that drive the dynamics live in `pricer_pricing`.
//!
//! ## Design Principles
//!
//! - **Validated constructors**: parameters are checked once, at construction
//! - **Typed degeneracy**: zero volatility or maturity surfaces as
//!   `PricingError::NumericDegeneracy`, never as NaN in a result
//! - **One engine for every asset domain**: equity spot and FX rate share the maths

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
pub mod models;
pub mod volatility;

//! Core traits for pricing models.
//!
//! This module defines the vanilla (call, put) pricing trait
//! [`PairPricer`]. Concrete models are dispatched through an enum in the
//! pricing layer; `Box<dyn PairPricer>` is never needed on the hot path.

pub mod priceable;

pub use priceable::PairPricer;

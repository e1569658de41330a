//! Recombining lattice models.
//!
//! This module provides:
//! - `BinomialTree`: Cox–Ross–Rubinstein tree with European backward induction

pub mod binomial;

pub use binomial::{BinomialTree, DEFAULT_TREE_STEPS, MAX_TREE_STEPS};

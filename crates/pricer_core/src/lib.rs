//! # pricer_core: Foundation Types for the Strike-Sweep Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Error taxonomy shared by every layer (`types::error`)
//! - Input validation helpers (`types::validation`)
//! - Quote and curve value types (`types::quote`)
//! - Cooperative cancellation (`types::cancel`)
//! - Asset domain labelling: equity spot vs FX rate (`types::asset`, `types::currency`)
//! - Decimal rounding for published quotes (`math::rounding`)
//! - The `PairPricer` trait every pricing model implements (`traits::priceable`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::rounding::round_to_cents;
//! use pricer_core::types::{Currency, PriceQuote};
//!
//! let quote = PriceQuote::rounded(99.996, 10.4567, 5.5749);
//! assert_eq!(quote.strike, 100.0);
//! assert_eq!(quote.call, 10.46);
//! assert_eq!(quote.put, 5.57);
//!
//! assert_eq!(Currency::JPY.code(), "JPY");
//! assert_eq!(round_to_cents(-2.346_f64), -2.35);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for quotes, curves, currencies and asset domains

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

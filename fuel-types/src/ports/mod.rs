//! Port traits (interfaces for adapters).
//!
//! The price client depends on these traits, not on a concrete HTTP adapter.

mod source;

pub use source::PriceSource;

//! # Fuel Types
//!
//! Domain types and port traits for the fuel price service.
//! This crate has no IO dependencies - only data structures,
//! lookup rules, and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Provinces, the province directory, prices and results
//! - `ports/` - The `PriceSource` trait upstream adapters implement
//! - `error/` - Upstream, lookup and HTTP-facing error types
//! - `json` - Output formatting shared by the CLI and the server

pub mod domain;
pub mod error;
pub mod json;
pub mod ports;

pub use domain::{
    FuelPrice, LastUpdateInfo, PriceEnvelope, PriceResult, Province, ProvinceDirectory,
    normalize_code,
};
pub use error::{AppError, FuelError, UpstreamError};
pub use json::to_pretty_json;
pub use ports::PriceSource;

//! # Fuel Hex
//!
//! HTTP adapter for the fuel price service.
//!
//! ## Architecture
//!
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document for the routes
//!
//! The server is generic over `S: PriceSource`, so handlers can be driven by
//! an in-memory source in tests.

pub mod inbound;
pub mod openapi;

pub use inbound::HttpServer;

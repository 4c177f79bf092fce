//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the price client.

pub(crate) mod handlers;
mod server;

#[cfg(test)]
mod handler_tests;

pub use server::HttpServer;

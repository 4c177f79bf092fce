//! Upstream price source port.
//!
//! Implementations can be HTTP clients, in-memory fixtures, etc.

use std::sync::Arc;

use crate::domain::{FuelPrice, LastUpdateInfo, Province};
use crate::error::UpstreamError;

/// Port trait for the raw upstream reads.
///
/// Each call is an independent request; implementations must not cache.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Full province list, in provider order.
    async fn fetch_provinces(&self) -> Result<Vec<Province>, UpstreamError>;

    /// Provider's last price update timestamp.
    async fn fetch_last_update(&self) -> Result<LastUpdateInfo, UpstreamError>;

    /// Current prices for an already-normalized province code.
    ///
    /// A response with no usable price grouping yields an empty list.
    async fn fetch_prices(&self, code: &str) -> Result<Vec<FuelPrice>, UpstreamError>;
}

#[async_trait::async_trait]
impl<T: PriceSource + ?Sized> PriceSource for Arc<T> {
    async fn fetch_provinces(&self) -> Result<Vec<Province>, UpstreamError> {
        (**self).fetch_provinces().await
    }

    async fn fetch_last_update(&self) -> Result<LastUpdateInfo, UpstreamError> {
        (**self).fetch_last_update().await
    }

    async fn fetch_prices(&self, code: &str) -> Result<Vec<FuelPrice>, UpstreamError> {
        (**self).fetch_prices(code).await
    }
}

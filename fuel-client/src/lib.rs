//! # Fuel Client
//!
//! A typed Rust client for the Opet fuel price API.
//!
//! `PriceClient` loads the province directory once when it is built and
//! validates every price lookup against it before touching the price
//! endpoints.

pub mod config;
pub mod http;
pub mod opet;
mod wire;

use fuel_types::{
    FuelError, FuelPrice, LastUpdateInfo, PriceEnvelope, PriceResult, PriceSource, Province,
    ProvinceDirectory, normalize_code, to_pretty_json,
};

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use opet::OpetSource;

/// Fuel price API client.
pub struct PriceClient<S: PriceSource = OpetSource> {
    source: S,
    directory: ProvinceDirectory,
}

impl PriceClient<OpetSource> {
    /// Connects to the configured provider and loads the province directory.
    pub async fn connect(config: &ClientConfig) -> Result<Self, FuelError> {
        let source = OpetSource::new(config)?;
        Self::with_source(source).await
    }
}

impl<S: PriceSource> PriceClient<S> {
    /// Builds a client over any source, loading the directory from it.
    #[tracing::instrument(skip(source))]
    pub async fn with_source(source: S) -> Result<Self, FuelError> {
        let provinces = source.fetch_provinces().await?;
        tracing::debug!(count = provinces.len(), "province directory loaded");

        Ok(Self {
            source,
            directory: ProvinceDirectory::new(provinces),
        })
    }

    /// The directory snapshot taken at construction.
    pub fn directory(&self) -> &ProvinceDirectory {
        &self.directory
    }

    /// Fetches the current province list from the provider.
    ///
    /// The directory used for lookups is not refreshed by this call.
    pub async fn fetch_provinces(&self) -> Result<Vec<Province>, FuelError> {
        Ok(self.source.fetch_provinces().await?)
    }

    /// Fetches the provider's last update timestamp.
    pub async fn fetch_last_update(&self) -> Result<LastUpdateInfo, FuelError> {
        Ok(self.source.fetch_last_update().await?)
    }

    /// Fetches prices for a code as given, without directory validation.
    pub async fn fetch_prices(&self, code: &str) -> Result<Vec<FuelPrice>, FuelError> {
        Ok(self.source.fetch_prices(code).await?)
    }

    /// Resolves `code` and assembles the normalized price result.
    #[tracing::instrument(skip(self))]
    pub async fn get_price(&self, code: &str) -> Result<PriceResult, FuelError> {
        let normalized = normalize_code(code);
        let province = self
            .directory
            .name_of(&normalized)
            .ok_or_else(|| FuelError::ProvinceNotFound(code.to_string()))?
            .to_string();

        let last_update = self.source.fetch_last_update().await?;
        let prices = self.source.fetch_prices(&normalized).await?;
        tracing::debug!(%province, count = prices.len(), "prices fetched");

        Ok(PriceResult {
            province,
            last_update: last_update.last_update_date,
            prices,
        })
    }

    /// `get_price` wrapped in `{"results": ...}` and pretty-printed.
    pub async fn price(&self, code: &str) -> Result<String, FuelError> {
        let envelope = PriceEnvelope::from(self.get_price(code).await?);
        // Plain string/number fields; serialization cannot fail.
        Ok(to_pretty_json(&envelope).unwrap_or_default())
    }
}

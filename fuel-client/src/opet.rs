//! HTTP adapter for the Opet fuel price API.

use fuel_types::{FuelPrice, LastUpdateInfo, PriceSource, Province, UpstreamError};

use crate::config::ClientConfig;
use crate::http::HttpFetcher;
use crate::wire::{RawPriceGroup, RawProvince};

/// `PriceSource` backed by the provider's public REST endpoints.
#[derive(Debug, Clone)]
pub struct OpetSource {
    base_url: String,
    fetcher: HttpFetcher,
}

impl OpetSource {
    pub fn new(config: &ClientConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            base_url: config.base_url.clone(),
            fetcher: HttpFetcher::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn provinces_url(&self) -> String {
        format!("{}/provinces", self.base_url)
    }

    fn last_update_url(&self) -> String {
        format!("{}/lastupdate", self.base_url)
    }

    fn prices_url(&self, code: &str) -> String {
        let endpoint = format!("{}/prices", self.base_url);
        let params = [("ProvinceCode", code), ("IncludeAllProducts", "true")];
        match reqwest::Url::parse_with_params(&endpoint, &params) {
            Ok(url) => url.into(),
            // Left for reqwest to reject with a transport error.
            Err(_) => format!("{endpoint}?ProvinceCode={code}&IncludeAllProducts=true"),
        }
    }
}

#[async_trait::async_trait]
impl PriceSource for OpetSource {
    async fn fetch_provinces(&self) -> Result<Vec<Province>, UpstreamError> {
        let raw: Vec<RawProvince> = self.fetcher.get_json(&self.provinces_url()).await?;
        Ok(raw.into_iter().map(Province::from).collect())
    }

    async fn fetch_last_update(&self) -> Result<LastUpdateInfo, UpstreamError> {
        self.fetcher.get_json(&self.last_update_url()).await
    }

    async fn fetch_prices(&self, code: &str) -> Result<Vec<FuelPrice>, UpstreamError> {
        let url = self.prices_url(code);
        let groups: Vec<serde_json::Value> = self.fetcher.get_json(&url).await?;

        first_group_prices(groups).map_err(|e| UpstreamError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

/// Extracts the product list of the first grouping object.
///
/// No groups, or a first group without a `prices` list, means the province
/// has no reported prices.
fn first_group_prices(
    groups: Vec<serde_json::Value>,
) -> Result<Vec<FuelPrice>, serde_json::Error> {
    let Some(first) = groups.into_iter().next() else {
        return Ok(Vec::new());
    };
    if !first.is_object() {
        return Ok(Vec::new());
    }

    let group: RawPriceGroup = serde_json::from_value(first)?;
    Ok(group
        .prices
        .unwrap_or_default()
        .into_iter()
        .map(FuelPrice::from)
        .collect())
}

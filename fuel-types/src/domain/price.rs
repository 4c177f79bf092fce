//! Fuel price records and the normalized price result.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current price of one named fuel product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FuelPrice {
    #[schema(example = "Kurşunsuz Benzin 95")]
    pub name: String,
    #[schema(example = 42.19)]
    pub amount: f64,
}

impl FuelPrice {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Timestamp of the provider's last price update.
///
/// The value is kept exactly as the provider sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdateInfo {
    #[schema(example = "2023-01-01T10:00:00")]
    pub last_update_date: String,
}

/// Normalized prices for one province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult {
    /// Province name from the directory
    #[schema(example = "İSTANBUL")]
    pub province: String,
    /// Provider last-update timestamp, verbatim
    #[schema(example = "2023-01-01T10:00:00")]
    pub last_update: String,
    pub prices: Vec<FuelPrice>,
}

/// `{"results": ...}` wrapper used for serialized price output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceEnvelope {
    pub results: PriceResult,
}

impl From<PriceResult> for PriceEnvelope {
    fn from(results: PriceResult) -> Self {
        Self { results }
    }
}

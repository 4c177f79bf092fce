//! Upstream response records.
//!
//! These mirror the provider's JSON exactly and are converted to domain types
//! before leaving the crate.

use serde::{Deserialize, Deserializer};

use fuel_types::{FuelPrice, Province};

#[derive(Debug, Deserialize)]
pub(crate) struct RawProvince {
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    pub name: String,
}

impl From<RawProvince> for Province {
    fn from(raw: RawProvince) -> Self {
        Province::new(raw.code, raw.name)
    }
}

/// One element of the `/prices` response. Only `prices` is read.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPriceGroup {
    #[serde(default)]
    pub prices: Option<Vec<RawProduct>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProduct {
    pub product_name: String,
    pub amount: f64,
}

impl From<RawProduct> for FuelPrice {
    fn from(raw: RawProduct) -> Self {
        FuelPrice::new(raw.product_name, raw.amount)
    }
}

/// The provider sends plate codes as numbers in some payloads and as
/// strings in others.
fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_code_accepts_number_and_string() {
        let raw: Vec<RawProvince> = serde_json::from_str(
            r#"[{"code": 34, "name": "İSTANBUL"}, {"code": "6", "name": "ANKARA"}]"#,
        )
        .unwrap();
        let provinces: Vec<Province> = raw.into_iter().map(Into::into).collect();
        assert_eq!(
            provinces,
            vec![Province::new("34", "İSTANBUL"), Province::new("6", "ANKARA")]
        );
    }

    #[test]
    fn test_province_ignores_extra_fields() {
        let raw: RawProvince =
            serde_json::from_str(r#"{"code": 1, "name": "ADANA", "districts": []}"#).unwrap();
        assert_eq!(raw.code, "1");
    }

    #[test]
    fn test_price_group_without_prices() {
        let group: RawPriceGroup = serde_json::from_str("{}").unwrap();
        assert!(group.prices.is_none());

        let group: RawPriceGroup = serde_json::from_str(r#"{"prices": null}"#).unwrap();
        assert!(group.prices.is_none());
    }

    #[test]
    fn test_product_maps_to_fuel_price() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"productName": "Petrol", "amount": 20.0, "productCode": "A100"}"#,
        )
        .unwrap();
        assert_eq!(FuelPrice::from(raw), FuelPrice::new("Petrol", 20.0));
    }
}

//! Domain models for the fuel price service.

pub mod price;
pub mod province;

pub use price::{FuelPrice, LastUpdateInfo, PriceEnvelope, PriceResult};
pub use province::{Province, ProvinceDirectory, normalize_code};

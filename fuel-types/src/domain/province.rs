//! Province domain model and the in-memory province directory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A province as listed by the upstream provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Province {
    /// Provider-assigned code (vehicle plate code)
    #[schema(example = "34")]
    pub code: String,
    /// Display name
    #[schema(example = "İSTANBUL")]
    pub name: String,
}

impl Province {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Normalizes a user-supplied province code.
///
/// All-digit codes lose their leading zeros, matching an integer round-trip
/// (`"034"` becomes `"34"`, `"000"` becomes `"0"`). Anything else is returned
/// unchanged.
pub fn normalize_code(raw: &str) -> String {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Snapshot of the provider's province list plus a code lookup table.
///
/// Built once and never mutated, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ProvinceDirectory {
    provinces: Vec<Province>,
    names_by_code: HashMap<String, String>,
}

impl ProvinceDirectory {
    /// Builds the directory, keying the lookup table by normalized code.
    ///
    /// Duplicate codes are not rejected; the last entry wins.
    pub fn new(provinces: Vec<Province>) -> Self {
        let names_by_code = provinces
            .iter()
            .map(|p| (normalize_code(&p.code), p.name.clone()))
            .collect();

        Self {
            provinces,
            names_by_code,
        }
    }

    /// Resolves a code (normalized first) to the province name.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names_by_code
            .get(&normalize_code(code))
            .map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.name_of(code).is_some()
    }

    /// Provinces in upstream order.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}

impl From<Vec<Province>> for ProvinceDirectory {
    fn from(provinces: Vec<Province>) -> Self {
        Self::new(provinces)
    }
}

//! JSON output formatting.

use serde::Serialize;

/// Pretty-prints with a two-space indent.
///
/// Non-ASCII text (Turkish province and product names) is written literally,
/// never as `\u` escapes.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

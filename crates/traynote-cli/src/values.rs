//! Parsing setting values typed on the command line.

use traynote_core::SettingValue;

/// Interpret `raw` as a JSON literal, falling back to plain text.
///
/// `true`, `false`, `null` and quoted strings become the matching value.
/// Anything else, including numbers, is kept verbatim as text so the store
/// can judge it.
pub fn parse_setting_value(raw: &str) -> SettingValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|json| SettingValue::from_json(&json))
        .unwrap_or_else(|| SettingValue::Text(raw.to_string()))
}

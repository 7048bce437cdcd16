//! Header loading and value normalization.
//!
//! A header is a flat JSON object of field name to value, as dumped from
//! an MR image file. Normalization keeps scalar values and arrays of
//! scalars, coerces numeric strings and drops everything that would only
//! add noise to the acquisition metadata.

use std::fs;
use std::path::Path;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{MetadataError, Result};

/// Fields never copied into acquisition metadata.
pub const EXCLUDED_FIELDS: &[&str] = &[
    "[Unknown]",
    "PixelData",
    "Pixel Data",
    "[User defined data]",
    "[Protocol Data Block (compressed)]",
    "[Histogram tables]",
    "[Unique image iden]",
];

/// Strings at or above this length are dropped.
pub const MAX_STRING_LEN: usize = 10240;

pub type Header = Map<String, Value>;

pub fn load_header(path: &Path) -> Result<Header> {
    let text = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| MetadataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(MetadataError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// True when the header carries image data.
pub fn has_pixel_data(header: &Header) -> bool {
    ["PixelData", "Pixel Data"]
        .iter()
        .any(|key| header.get(*key).is_some_and(|value| !value.is_null()))
}

/// String form of a scalar header field; empty values count as absent.
pub fn field_str(header: &Header, key: &str) -> Option<String> {
    match header.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalized copy of every header field worth keeping.
pub fn normalize_header(header: &Header) -> Header {
    let mut out = Map::new();
    for (key, value) in header {
        if EXCLUDED_FIELDS.contains(&key.as_str()) {
            debug!(field = %key, "excluded header field");
            continue;
        }
        match normalize_value(value) {
            Some(value) => {
                out.insert(key.clone(), value);
            }
            None => debug!(field = %key, "dropped header field"),
        }
    }
    out
}

/// Normalizes one header value, or returns `None` if it should be dropped.
pub fn normalize_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Bool(_) | Value::Number(_) => Some(value.clone()),
        Value::Array(items) => {
            if items.is_empty() || items.iter().any(Value::is_object) {
                None
            } else {
                Some(value.clone())
            }
        }
        Value::String(s) => normalize_string(s),
    }
}

fn normalize_string(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Value::from(int));
    }
    if let Some(number) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Some(Value::Number(number));
    }

    let cleaned: String = raw.chars().filter(|c| is_printable_ascii(*c)).collect();
    if cleaned.is_empty() || cleaned == "?" || cleaned.len() >= MAX_STRING_LEN {
        return None;
    }
    Some(Value::String(cleaned))
}

fn is_printable_ascii(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header(value: Value) -> Header {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn numeric_strings_are_coerced() {
        assert_eq!(normalize_value(&json!("42")), Some(json!(42)));
        assert_eq!(normalize_value(&json!(" 3.5 ")), Some(json!(3.5)));
        assert_eq!(normalize_value(&json!("0")), Some(json!(0)));
        assert_eq!(normalize_value(&json!(0)), Some(json!(0)));
    }

    #[test]
    fn strings_are_cleaned() {
        assert_eq!(normalize_value(&json!("Müller")), Some(json!("Mller")));
        assert_eq!(normalize_value(&json!("a\u{7}b")), Some(json!("ab")));
        assert_eq!(normalize_value(&json!("?")), None);
        assert_eq!(normalize_value(&json!("")), None);
        assert_eq!(normalize_value(&json!("é")), None);
    }

    #[test]
    fn long_strings_are_dropped() {
        let long = "x".repeat(MAX_STRING_LEN);
        assert_eq!(normalize_value(&json!(long)), None);
        let short = "x".repeat(MAX_STRING_LEN - 1);
        assert!(normalize_value(&json!(short)).is_some());
    }

    #[test]
    fn sequences_and_empty_values_are_dropped() {
        assert_eq!(normalize_value(&json!(null)), None);
        assert_eq!(normalize_value(&json!([])), None);
        assert_eq!(normalize_value(&json!({"a": 1})), None);
        assert_eq!(normalize_value(&json!([{"a": 1}])), None);
        assert_eq!(normalize_value(&json!([1, 2])), Some(json!([1, 2])));
    }

    #[test]
    fn excluded_fields_are_removed() {
        let raw = header(json!({
            "PixelData": "AAAA",
            "[Unknown]": "x",
            "EchoTime": "2.5",
            "SeriesDescription": "T1 MPRAGE"
        }));
        let normalized = normalize_header(&raw);
        assert_eq!(
            Value::Object(normalized),
            json!({"EchoTime": 2.5, "SeriesDescription": "T1 MPRAGE"})
        );
    }

    #[test]
    fn pixel_data_detection() {
        assert!(has_pixel_data(&header(json!({"PixelData": "AA"}))));
        assert!(has_pixel_data(&header(json!({"Pixel Data": 1}))));
        assert!(!has_pixel_data(&header(json!({"PixelData": null}))));
        assert!(!has_pixel_data(&header(json!({}))));
    }

    #[test]
    fn field_str_accepts_numbers() {
        let raw = header(json!({"PatientAge": 30, "Modality": "MR", "Empty": ""}));
        assert_eq!(field_str(&raw, "PatientAge").as_deref(), Some("30"));
        assert_eq!(field_str(&raw, "Modality").as_deref(), Some("MR"));
        assert_eq!(field_str(&raw, "Empty"), None);
        assert_eq!(field_str(&raw, "Missing"), None);
    }
}

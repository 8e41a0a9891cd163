//! Closed value type for record fields.
//!
//! # Responsibility
//! - Represent every value a record field can hold without dynamic typing.
//! - Provide conversions from common Rust and JSON values.
//!
//! # Invariants
//! - Asset and reference values only appear as `RecordValue` variants, never
//!   as raw JSON objects, so pending-asset checks can find them.
//! - JSON integers outside the `i64` range convert to `Float` and may lose
//!   precision.

use crate::model::asset::Asset;
use std::collections::BTreeMap;

const TYPE_TAG_KEY: &str = "$type";
const ASSET_TYPE_TAG: &str = "asset";
const REFERENCE_TYPE_TAG: &str = "ref";

/// Value stored under one record field name.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<RecordValue>),
    Map(BTreeMap<String, RecordValue>),
    /// Binary attachment, pending or resolved.
    Asset(Asset),
    /// Reference to another record by `"<type>/<id>"`.
    Reference(String),
}

impl RecordValue {
    /// Returns whether this value, or any value nested inside it, is a
    /// pending asset.
    pub fn contains_pending_asset(&self) -> bool {
        self.find_pending_asset().is_some()
    }

    /// Returns the path of the first pending asset below this value.
    ///
    /// The empty path means this value itself is the pending asset. List
    /// positions render as `[index]` and map keys as `.key`.
    pub fn find_pending_asset(&self) -> Option<String> {
        match self {
            Self::Asset(asset) if asset.is_pending() => Some(String::new()),
            Self::List(items) => items.iter().enumerate().find_map(|(index, item)| {
                item.find_pending_asset()
                    .map(|rest| format!("[{index}]{rest}"))
            }),
            Self::Map(entries) => entries.iter().find_map(|(key, item)| {
                item.find_pending_asset().map(|rest| format!(".{key}{rest}"))
            }),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Self::Asset(asset) => Some(asset),
            _ => None,
        }
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for RecordValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Asset> for RecordValue {
    fn from(value: Asset) -> Self {
        Self::Asset(value)
    }
}

impl<T: Into<RecordValue>> From<Vec<T>> for RecordValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RecordValue>> From<Option<T>> for RecordValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for RecordValue {
    /// Converts JSON into record values.
    ///
    /// Objects tagged `"$type": "asset"` become `Asset` (pending unless
    /// `$url` is a string) and `"$type": "ref"` objects with a string `$id`
    /// become `Reference`. Other objects become `Map`.
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Self::Integer(integer),
                // u64 above i64::MAX and fractional values; lossy.
                None => number.as_f64().map_or(Self::Null, Self::Float),
            },
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => from_json_object(entries),
        }
    }
}

fn from_json_object(entries: serde_json::Map<String, serde_json::Value>) -> RecordValue {
    if let Some(value) = decode_typed_object(&entries) {
        return value;
    }

    RecordValue::Map(
        entries
            .into_iter()
            .map(|(key, item)| (key, RecordValue::from(item)))
            .collect(),
    )
}

fn decode_typed_object(
    entries: &serde_json::Map<String, serde_json::Value>,
) -> Option<RecordValue> {
    let text = |key: &str| entries.get(key).and_then(serde_json::Value::as_str);

    match text(TYPE_TAG_KEY)? {
        ASSET_TYPE_TAG => {
            let mut builder = Asset::builder(text("$name").unwrap_or_default());
            if let Some(mime_type) = text("$content_type") {
                builder = builder.mime_type(mime_type);
            }
            let mut asset = builder.build();
            if let Some(url) = text("$url") {
                asset.resolve(url);
            }
            Some(RecordValue::Asset(asset))
        }
        REFERENCE_TYPE_TAG => text("$id").map(|id| RecordValue::Reference(id.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::RecordValue;
    use crate::model::asset::Asset;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn pending() -> Asset {
        Asset::builder("hello.txt")
            .mime_type("text/plain")
            .data(b"hello world".to_vec())
            .build()
    }

    #[test]
    fn top_level_pending_asset_reports_empty_path() {
        let value = RecordValue::from(pending());
        assert_eq!(value.find_pending_asset(), Some(String::new()));
    }

    #[test]
    fn nested_pending_asset_reports_path() {
        let mut inner = BTreeMap::new();
        inner.insert("cover".to_string(), RecordValue::from(pending()));
        let value = RecordValue::List(vec![RecordValue::Null, RecordValue::Map(inner)]);

        assert_eq!(value.find_pending_asset().as_deref(), Some("[1].cover"));
    }

    #[test]
    fn resolved_asset_is_not_pending() {
        let asset = Asset::resolved("a.png", "image/png", "https://cdn.example/a.png");
        assert!(!RecordValue::from(asset).contains_pending_asset());
    }

    #[test]
    fn json_numbers_prefer_integers_within_i64() {
        let value = RecordValue::from(json!([1, -7, 2.5, "x", null]));
        assert_eq!(
            value,
            RecordValue::List(vec![
                RecordValue::Integer(1),
                RecordValue::Integer(-7),
                RecordValue::Float(2.5),
                RecordValue::String("x".to_string()),
                RecordValue::Null,
            ])
        );
    }

    #[test]
    fn json_integer_above_i64_max_becomes_float() {
        let value = RecordValue::from(json!(u64::MAX));
        assert_eq!(value, RecordValue::Float(u64::MAX as f64));
    }

    #[test]
    fn json_asset_objects_decode_to_assets() {
        let pending = RecordValue::from(json!({
            "$type": "asset",
            "$name": "x.bin",
            "$content_type": "application/octet-stream"
        }));
        assert!(pending.contains_pending_asset());

        let resolved = RecordValue::from(json!({
            "$type": "asset",
            "$name": "a.png",
            "$content_type": "image/png",
            "$url": "https://cdn.example/a.png"
        }));
        assert_eq!(
            resolved,
            RecordValue::Asset(Asset::resolved(
                "a.png",
                "image/png",
                "https://cdn.example/a.png"
            ))
        );

        let nested = RecordValue::from(json!({ "files": [{ "$type": "asset" }] }));
        assert_eq!(nested.find_pending_asset().as_deref(), Some(".files[0]"));
    }

    #[test]
    fn json_ref_objects_decode_to_references() {
        assert_eq!(
            RecordValue::from(json!({ "$type": "ref", "$id": "Note/n-1" })),
            RecordValue::Reference("Note/n-1".to_string())
        );
        assert!(matches!(
            RecordValue::from(json!({ "$type": "ref" })),
            RecordValue::Map(_)
        ));
    }
}

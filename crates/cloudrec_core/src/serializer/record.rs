//! Record -> wire map serialization.
//!
//! # Invariants
//! - Output always carries `_id`, `_recordType` and `_recordID`.
//! - Serialization never fails and never validates; pending assets are
//!   serialized without `$url` and rejected later by request validation.

use crate::model::asset::Asset;
use crate::model::record::Record;
use crate::model::value::RecordValue;
use serde_json::{Map, Number, Value};

pub const KEY_ID: &str = "_id";
pub const KEY_RECORD_TYPE: &str = "_recordType";
pub const KEY_RECORD_ID: &str = "_recordID";

const KEY_TYPE_TAG: &str = "$type";
const TYPE_ASSET: &str = "asset";
const TYPE_REFERENCE: &str = "ref";

/// Serializes one record into its wire object.
pub fn serialize_record(record: &Record) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(KEY_ID.to_string(), Value::String(record.reference()));
    object.insert(
        KEY_RECORD_TYPE.to_string(),
        Value::String(record.record_type().to_string()),
    );
    object.insert(
        KEY_RECORD_ID.to_string(),
        Value::String(record.id().to_string()),
    );

    for (key, value) in record.fields() {
        object.insert(key.clone(), serialize_value(value));
    }
    object
}

/// Serializes one field value, recursing into lists and maps.
pub fn serialize_value(value: &RecordValue) -> Value {
    match value {
        RecordValue::Null => Value::Null,
        RecordValue::Bool(flag) => Value::Bool(*flag),
        RecordValue::Integer(integer) => Value::Number((*integer).into()),
        // NaN and infinities have no JSON form.
        RecordValue::Float(float) => Number::from_f64(*float).map_or(Value::Null, Value::Number),
        RecordValue::String(text) => Value::String(text.clone()),
        RecordValue::List(items) => Value::Array(items.iter().map(serialize_value).collect()),
        RecordValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), serialize_value(item)))
                .collect(),
        ),
        RecordValue::Asset(asset) => serialize_asset(asset),
        RecordValue::Reference(reference) => {
            let mut object = Map::new();
            object.insert(
                KEY_TYPE_TAG.to_string(),
                Value::String(TYPE_REFERENCE.to_string()),
            );
            object.insert("$id".to_string(), Value::String(reference.clone()));
            Value::Object(object)
        }
    }
}

fn serialize_asset(asset: &Asset) -> Value {
    let mut object = Map::new();
    object.insert(
        KEY_TYPE_TAG.to_string(),
        Value::String(TYPE_ASSET.to_string()),
    );
    object.insert("$name".to_string(), Value::String(asset.name.clone()));
    object.insert(
        "$content_type".to_string(),
        Value::String(asset.mime_type.clone()),
    );
    if let Some(url) = &asset.url {
        object.insert("$url".to_string(), Value::String(url.clone()));
    }
    Value::Object(object)
}

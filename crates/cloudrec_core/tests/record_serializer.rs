use cloudrec_core::{serialize_record, serialize_value, Asset, Record, RecordValue};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn metadata_keys_identify_record() {
    let record = Record::with_id("Note", "n-1").unwrap();
    let object = serialize_record(&record);

    assert_eq!(object["_id"], "Note/n-1");
    assert_eq!(object["_recordType"], "Note");
    assert_eq!(object["_recordID"], "n-1");
    assert_eq!(object.len(), 3);
}

#[test]
fn user_fields_pass_through() {
    let mut record = Record::with_id("Note", "n-1").unwrap();
    record.set("identifier", 1).unwrap();
    record.set("title", "hello").unwrap();
    record.set("done", false).unwrap();
    record.set("score", 4.5).unwrap();
    record.set("tags", vec!["a", "b"]).unwrap();
    record.set("deleted_at", Option::<i64>::None).unwrap();

    let mut meta = BTreeMap::new();
    meta.insert("pinned".to_string(), RecordValue::Bool(true));
    record.set("meta", RecordValue::Map(meta)).unwrap();

    let object = serialize_record(&record);
    assert_eq!(object["identifier"], 1);
    assert_eq!(object["title"], "hello");
    assert_eq!(object["done"], false);
    assert_eq!(object["score"], 4.5);
    assert_eq!(object["tags"], json!(["a", "b"]));
    assert_eq!(object["deleted_at"], json!(null));
    assert_eq!(object["meta"], json!({ "pinned": true }));
}

#[test]
fn assets_serialize_as_typed_objects() {
    let resolved = Asset::resolved("a.png", "image/png", "https://cdn.example/a.png");
    assert_eq!(
        serialize_value(&RecordValue::from(resolved)),
        json!({
            "$type": "asset",
            "$name": "a.png",
            "$content_type": "image/png",
            "$url": "https://cdn.example/a.png"
        })
    );

    let pending = Asset::builder("hello.txt")
        .mime_type("text/plain")
        .data("hello world".as_bytes())
        .build();
    assert_eq!(
        serialize_value(&RecordValue::from(pending)),
        json!({
            "$type": "asset",
            "$name": "hello.txt",
            "$content_type": "text/plain"
        })
    );
}

#[test]
fn references_serialize_as_typed_objects() {
    let target = Record::with_id("Note", "n-1").unwrap();
    assert_eq!(
        serialize_value(&target.to_reference_value()),
        json!({ "$type": "ref", "$id": "Note/n-1" })
    );
}

#[test]
fn non_finite_floats_become_null() {
    assert_eq!(serialize_value(&RecordValue::Float(f64::NAN)), json!(null));
    assert_eq!(
        serialize_value(&RecordValue::Float(f64::INFINITY)),
        json!(null)
    );
}

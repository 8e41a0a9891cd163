use cloudrec_core::{Asset, Database, DatabaseHandle};
use serde_json::json;

#[test]
fn pending_asset_serialization_uses_expected_fields() {
    let asset = Asset::builder("hello.txt")
        .mime_type("text/plain")
        .data("hi".as_bytes())
        .build();

    let json = serde_json::to_value(&asset).unwrap();
    assert_eq!(json["name"], "hello.txt");
    assert_eq!(json["mime_type"], "text/plain");
    assert_eq!(json["data"], json!([104, 105]));
    assert_eq!(json["url"], json!(null));

    let decoded: Asset = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, asset);
    assert!(decoded.is_pending());
}

#[test]
fn resolved_asset_omits_empty_data() {
    let asset = Asset::resolved("a.png", "image/png", "https://cdn.example/a.png");

    let json = serde_json::to_value(&asset).unwrap();
    assert!(json.get("data").is_none());
    assert_eq!(json["url"], "https://cdn.example/a.png");

    let decoded: Asset = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, asset);
}

#[test]
fn asset_deserialize_defaults_missing_data_and_url() {
    let value = json!({
        "name": "blob",
        "mime_type": "application/octet-stream"
    });

    let asset: Asset = serde_json::from_value(value).unwrap();
    assert!(asset.is_pending());
    assert_eq!(asset.size(), 0);
}

#[test]
fn database_serialization_keeps_partition_id() {
    let json = serde_json::to_value(Database::private()).unwrap();
    assert_eq!(json, json!({ "partition_id": "_private" }));

    let decoded: Database = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.partition_id(), "_private");
    assert_eq!(decoded, Database::private());
}

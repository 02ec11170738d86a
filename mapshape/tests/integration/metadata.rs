use mapshape::{Decoder, Metadata, Shaped, decode_partial, value};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Backup {
    bucket: String,
    retention_days: u32,
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Service {
    name: String,
    replicas: u16,
    backup: Option<Backup>,
}

fn input() -> mapshape::Value {
    value!({
        "name": "api",
        "backup": { "bucket": "s3://b", "extra": true },
    })
}

fn expected() -> Metadata {
    Metadata {
        keys: vec!["name".into(), "backup".into(), "backup.bucket".into()],
        unused: vec!["backup.extra".into()],
        unset: vec!["replicas".into(), "backup.retention_days".into()],
    }
}

#[test]
fn metadata_lists_keys_in_traversal_order() {
    let mut service = Service::default();
    let metadata = Decoder::default()
        .decode_with_metadata(&input(), &mut service)
        .unwrap();
    assert_eq!(metadata, expected());
    assert_eq!(service.backup.unwrap().bucket, "s3://b");
}

#[test]
fn partial_results_carry_the_same_metadata() {
    let mut service = Service::default();
    let result = decode_partial(&input(), &mut service);
    assert!(result.is_ok());
    assert_eq!(result.metadata, expected());
    assert_eq!(result.into_result().unwrap(), expected());
}

#[test]
fn failed_fields_are_still_keys() {
    let mut service = Service::default();
    let result = decode_partial(&value!({ "name": "x", "replicas": "many" }), &mut service);
    assert_eq!(result.errors.len(), 1);
    assert!(result.is_partial());
    assert_eq!(result.metadata.keys, ["name", "replicas"]);
    assert_eq!(result.metadata.unset, ["backup"]);
}

#[test]
fn list_elements_appear_with_indices() {
    let mut services: Vec<Service> = Vec::new();
    let metadata = Decoder::default()
        .decode_with_metadata(&value!([{ "name": "a", "other": 1 }]), &mut services)
        .unwrap();
    assert_eq!(metadata.keys, ["[0].name"]);
    assert_eq!(metadata.unused, ["[0].other"]);
}

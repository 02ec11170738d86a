use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use mapshape::{Decoder, DecoderConfig, Shaped, decode, decode_partial, value};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Limits {
    limits: BTreeMap<String, u32>,
}

#[test]
fn entries_merge_into_existing_maps() {
    let mut limits = Limits::default();
    limits.limits.insert("cpu".into(), 1);
    limits.limits.insert("disk".into(), 10);

    decode(&value!({ "limits": { "cpu": 4, "net": 100 } }), &mut limits).unwrap();

    let expected: BTreeMap<String, u32> = [("cpu", 4), ("disk", 10), ("net", 100)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(limits.limits, expected);
}

#[test]
fn rejected_entries_are_not_inserted() {
    let mut limits = Limits::default();
    let result = decode_partial(
        &value!({ "limits": { "cpu": 2, "mem": "lots" } }),
        &mut limits,
    );
    assert_eq!(limits.limits.len(), 1);
    assert_eq!(limits.limits["cpu"], 2);
    insta::assert_snapshot!(result.errors[0], @"limits[mem]: expected `u32`, got string");
}

#[test]
fn null_entries_insert_zero_values() {
    let mut map: HashMap<String, Option<u8>> = HashMap::new();
    map.insert("a".into(), Some(3));
    decode(&value!({ "a": null, "b": 1 }), &mut map).unwrap();
    assert_eq!(map["a"], None);
    assert_eq!(map["b"], Some(1));
}

#[test]
fn zero_fields_clears_before_merging() {
    let mut limits = Limits::default();
    limits.limits.insert("disk".into(), 10);
    Decoder::new(DecoderConfig::new().zero_fields(true))
        .decode(&value!({ "limits": { "cpu": 4 } }), &mut limits)
        .unwrap();
    assert_eq!(limits.limits.keys().collect::<Vec<_>>(), ["cpu"]);
}

#[test]
fn maps_need_objects() {
    let mut map: BTreeMap<String, u8> = BTreeMap::new();
    let result = decode_partial(&value!(["a"]), &mut map);
    insta::assert_snapshot!(result.errors[0], @"<root>: expected an object for `BTreeMap<String, u8>`, got array");
}

#[test]
fn index_maps_keep_input_order() {
    let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
    decode(
        &value!({ "zeta": ["z"], "alpha": [], "mid": ["m", "n"] }),
        &mut map,
    )
    .unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    assert_eq!(map["mid"], ["m", "n"]);
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Endpoint {
    url: String,
    retries: u8,
}

#[test]
fn struct_values_report_nested_paths() {
    let mut endpoints: BTreeMap<String, Endpoint> = BTreeMap::new();
    let err = decode(
        &value!({ "primary": { "url": "a" }, "backup": { "url": "b", "retries": -1 } }),
        &mut endpoints,
    )
    .unwrap_err();
    assert_eq!(endpoints["primary"].url, "a");
    assert_eq!(endpoints["backup"].url, "b");
    insta::assert_snapshot!(err, @r"
    1 error decoding:
    * [backup].retries: -1 is out of range for `u8`
    ");
}

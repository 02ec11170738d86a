use mapshape_testhelpers::test;
use mapshape_value::{VNumber, VObject, Value, ValueType, value};

#[test]
fn objects_keep_insertion_order() {
    let v = value!({ "zeta": 1, "alpha": 2, "mid": 3 });
    let keys: Vec<&str> = v
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn display_is_compact_json() {
    let v = value!({
        "name": "Ferris",
        "age": 9,
        "ratio": 0.25,
        "langs": ["rust", null],
        "nested": { "ok": true }
    });
    insta::assert_snapshot!(v, @r#"{"name":"Ferris","age":9,"ratio":0.25,"langs":["rust",null],"nested":{"ok":true}}"#);
}

#[test]
fn collect_into_values() {
    let arr: Value = (1..=3).collect();
    assert_eq!(arr, value!([1, 2, 3]));

    let obj: VObject = [("a", Value::from(1)), ("b", Value::Null)]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();
    assert_eq!(Value::from(obj), value!({ "a": 1, "b": null }));
}

#[test]
fn value_types() {
    let cases = [
        (value!(null), ValueType::Null),
        (value!(false), ValueType::Bool),
        (value!(-3), ValueType::Number),
        (value!("s"), ValueType::String),
        (value!([]), ValueType::Array),
        (value!({}), ValueType::Object),
    ];
    for (v, expected) in cases {
        assert_eq!(v.value_type(), expected, "{v}");
    }
}

#[test]
fn numbers_from_mixed_sources() {
    assert_eq!(value!(7u8), Value::Number(VNumber::from_i64(7)));
    assert_eq!(value!(-7i64).as_number().and_then(VNumber::to_u64), None);
    assert!(value!(1.0).as_number().is_some_and(VNumber::is_float));
}

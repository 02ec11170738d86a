use mapshape::{
    DecodeErrorKind, Decoder, DecoderConfig, FieldMatching, Shaped, Value, ValueType, decode,
    decode_partial, value,
};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Pair {
    a: i64,
    b: String,
}

#[test]
fn one_bad_field_does_not_stop_the_others() {
    let mut pair = Pair {
        a: 7,
        b: String::new(),
    };
    let result = decode_partial(&value!({ "a": [1], "b": "set" }), &mut pair);
    assert_eq!(pair.a, 7);
    assert_eq!(pair.b, "set");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.to_string(), "a");
    assert_eq!(
        result.errors[0].kind,
        DecodeErrorKind::TypeMismatch {
            expected: i64::SHAPE,
            got: ValueType::Array,
        }
    );
}

#[test]
fn errors_follow_declaration_order() {
    let mut pair = Pair::default();
    // input order is the reverse of field order
    let err = decode(&value!({ "b": {}, "a": "x" }), &mut pair).unwrap_err();
    insta::assert_snapshot!(err, @r"
    2 errors decoding:
    * a: expected `i64`, got string
    * b: expected `String`, got object
    ");
}

#[test]
fn root_shape_mismatch_is_a_single_error() {
    let mut pair = Pair::default();
    let result = decode_partial(&value!([1, 2]), &mut pair);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].path.is_root());
    insta::assert_snapshot!(result.errors[0], @"<root>: expected an object for `Pair`, got array");
    assert!(result.total_failure);
}

#[test]
fn null_root_is_a_no_op() {
    let mut pair = Pair {
        a: 1,
        b: "kept".into(),
    };
    let result = decode_partial(&Value::Null, &mut pair);
    assert!(result.is_ok());
    assert!(!result.total_failure);
    assert_eq!(pair.b, "kept");
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Server {
    host: String,
    port: u16,
}

#[test]
fn keys_match_case_insensitively() {
    let mut server = Server::default();
    decode(&value!({ "HOST": "db", "Port": 5432 }), &mut server).unwrap();
    assert_eq!(
        server,
        Server {
            host: "db".into(),
            port: 5432,
        }
    );
}

#[test]
fn exact_key_beats_a_case_insensitive_one() {
    let mut server = Server::default();
    let metadata = Decoder::default()
        .decode_with_metadata(&value!({ "Host": "folded", "host": "exact" }), &mut server)
        .unwrap();
    assert_eq!(server.host, "exact");
    assert_eq!(metadata.unused, ["Host"]);
}

#[test]
fn first_of_several_folded_keys_wins() {
    let mut server = Server::default();
    let metadata = Decoder::default()
        .decode_with_metadata(&value!({ "HOST": "first", "Host": "second" }), &mut server)
        .unwrap();
    assert_eq!(server.host, "first");
    assert_eq!(metadata.unused, ["Host"]);
}

#[test]
fn exact_matching_ignores_other_cases() {
    let mut server = Server::default();
    let decoder = Decoder::new(DecoderConfig::new().field_matching(FieldMatching::Exact));
    let metadata = decoder
        .decode_with_metadata(&value!({ "HOST": "db", "port": 1 }), &mut server)
        .unwrap();
    assert_eq!(server.host, "");
    assert_eq!(server.port, 1);
    assert_eq!(metadata.unused, ["HOST"]);
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Keywords {
    r#type: String,
    r#match: bool,
}

#[test]
fn raw_identifiers_match_their_plain_names() {
    let mut kw = Keywords::default();
    decode(&value!({ "type": "service", "MATCH": true }), &mut kw).unwrap();
    assert_eq!(kw.r#type, "service");
    assert!(kw.r#match);
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct WithExtra {
    name: String,
    extra: Value,
}

#[test]
fn value_fields_receive_the_subtree() {
    let mut with_extra = WithExtra::default();
    decode(
        &value!({ "name": "n", "extra": { "anything": [1, "two", null] } }),
        &mut with_extra,
    )
    .unwrap();
    assert_eq!(with_extra.extra, value!({ "anything": [1, "two", null] }));
}

#[test]
fn concurrent_decodes_share_the_lookup_cache() {
    let input = value!({ "HOST": "h", "port": 1 });
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut server = Server::default();
                decode(&input, &mut server).unwrap();
                assert_eq!(server.host, "h");
            });
        }
    });
}

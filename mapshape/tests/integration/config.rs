use mapshape::{
    DecodeErrorKind, Decoder, DecoderConfig, FieldMatching, Shaped, Value, decode, value,
};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Flags {
    verbose: bool,
    level: i32,
    ratio: f64,
    name: String,
    tags: Vec<String>,
}

fn weak() -> Decoder {
    Decoder::new(DecoderConfig::new().weakly_typed_input(true))
}

#[test]
fn defaults_are_strict_and_lenient_about_keys() {
    let config = DecoderConfig::default();
    assert_eq!(config.field_matching, FieldMatching::CaseInsensitive);
    assert!(!config.weakly_typed_input);
    assert!(!config.error_unused);
    assert!(!config.error_unset);
    assert!(!config.zero_fields);
    assert_eq!(config, DecoderConfig::new());
}

#[test]
fn weak_input_converts_between_scalars() {
    let mut flags = Flags::default();
    weak()
        .decode(
            &value!({
                "verbose": "true",
                "level": "-3",
                "ratio": "0.25",
                "name": 12,
                "tags": {},
            }),
            &mut flags,
        )
        .unwrap();
    assert_eq!(
        flags,
        Flags {
            verbose: true,
            level: -3,
            ratio: 0.25,
            name: "12".into(),
            tags: Vec::new(),
        }
    );
}

#[test]
fn weak_input_still_rejects_unparseable_strings() {
    let mut flags = Flags::default();
    let err = weak()
        .decode(&value!({ "verbose": "yes", "level": "1.5" }), &mut flags)
        .unwrap_err();
    insta::assert_snapshot!(err, @r#"
    2 errors decoding:
    * verbose: cannot parse "yes" as `bool`
    * level: cannot parse "1.5" as `i32`
    "#);
}

#[test]
fn strict_input_refuses_weak_conversions() {
    let mut flags = Flags::default();
    let err = decode(&value!({ "verbose": "true", "tags": "one" }), &mut flags).unwrap_err();
    insta::assert_snapshot!(err, @r"
    2 errors decoding:
    * verbose: expected `bool`, got string
    * tags: expected an array for `Vec<String>`, got string
    ");
}

#[test]
fn unused_keys_can_be_errors() {
    let decoder = Decoder::new(DecoderConfig::new().error_unused(true));
    let mut server = Server::default();
    let err = decoder
        .decode(&value!({ "hots": "db", "port": 80, "zzz": 1 }), &mut server)
        .unwrap_err();
    assert_eq!(server.port, 80);
    insta::assert_snapshot!(err, @r"
    2 errors decoding:
    * hots: unused key `hots` (did you mean `host`?)
    * zzz: unused key `zzz`
    ");
}

#[test]
fn loosely_similar_keys_still_get_a_suggestion() {
    let decoder = Decoder::new(DecoderConfig::new().error_unused(true));
    let mut server = Server::default();
    let err = decoder
        .decode(&value!({ "h0st_x": "db" }), &mut server)
        .unwrap_err();
    assert_eq!(
        err.errors()[0].kind,
        DecodeErrorKind::UnusedKey {
            key: "h0st_x".into(),
            suggestion: Some("host"),
        }
    );
}

#[test]
fn unset_fields_can_be_errors() {
    let decoder = Decoder::new(DecoderConfig::new().error_unset(true));
    let mut server = Server::default();
    let err = decoder.decode(&value!({ "host": "db" }), &mut server).unwrap_err();
    assert_eq!(server.host, "db");
    let errors = err.into_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path.to_string(), "port");
    assert_eq!(errors[0].kind, DecodeErrorKind::UnsetField { field: "port" });
}

#[test]
fn unset_errors_come_before_unused_errors() {
    let decoder = Decoder::new(DecoderConfig::new().error_unset(true).error_unused(true));
    let mut server = Server::default();
    let err = decoder
        .decode(&value!({ "hots": "db", "port": 1 }), &mut server)
        .unwrap_err();
    insta::assert_snapshot!(err, @r"
    2 errors decoding:
    * host: field `host` was not set
    * hots: unused key `hots` (did you mean `host`?)
    ");
}

#[test]
fn zero_fields_resets_on_null() {
    let input = value!({ "port": null, "host": null });
    let mut server = Server {
        host: "kept".into(),
        port: 5,
    };

    decode(&input, &mut server).unwrap();
    assert_eq!(server.port, 5);
    assert_eq!(server.host, "kept");

    Decoder::new(DecoderConfig::new().zero_fields(true))
        .decode(&input, &mut server)
        .unwrap();
    assert_eq!(server, Server::default());
}

#[test]
fn zero_fields_resets_dynamic_values() {
    let mut value = value!({ "old": true });
    Decoder::new(DecoderConfig::new().zero_fields(true))
        .decode(&Value::Null, &mut value)
        .unwrap();
    assert_eq!(value, Value::Null);
}

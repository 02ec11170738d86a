use mapshape::{Shaped, Value, decode_partial};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Database {
    url: String,
    pool_size: u16,
    replicas: Vec<String>,
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct AppConfig {
    name: String,
    database: Database,
    features: Vec<String>,
}

#[test]
fn decodes_parsed_json() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{
            "name": "billing",
            "database": {
                "URL": "postgres://db",
                "pool_size": 70000,
                "replicas": ["r1", "r2"]
            },
            "features": ["invoices"]
        }"#,
    )
    .unwrap();

    let mut config = AppConfig::default();
    let result = decode_partial(&Value::from(json), &mut config);

    assert_eq!(config.name, "billing");
    assert_eq!(config.database.url, "postgres://db");
    assert_eq!(config.database.pool_size, 0);
    assert_eq!(config.database.replicas, ["r1", "r2"]);
    assert_eq!(config.features, ["invoices"]);
    insta::assert_snapshot!(result.errors[0], @"database.pool_size: 70000 is out of range for `u16`");
    assert!(result.is_partial());
}

use std::collections::BTreeMap;

use mapshape::{Shaped, Value, decode, to_value, value};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq, Shaped)]
struct Limits {
    cpu: f32,
    memory: u64,
    burst: Option<u128>,
}

#[derive(Debug, Default, PartialEq, Shaped)]
struct Deployment {
    name: String,
    initial: char,
    enabled: bool,
    offset: i128,
    replicas: Vec<u8>,
    limits: Option<Box<Limits>>,
    labels: BTreeMap<String, String>,
    fallback: Option<Box<Deployment>>,
    annotations: Value,
}

fn sample() -> Deployment {
    let mut labels = BTreeMap::new();
    labels.insert("tier".to_string(), "web".to_string());
    Deployment {
        name: "frontend".into(),
        initial: 'f',
        enabled: true,
        offset: -40,
        replicas: vec![1, 2, 3],
        limits: Some(Box::new(Limits {
            cpu: 1.5,
            memory: 1 << 40,
            burst: None,
        })),
        labels,
        fallback: Some(Box::new(Deployment {
            name: "static".into(),
            ..Deployment::default()
        })),
        annotations: value!({ "owner": "team-a", "weights": [0.5, 2] }),
    }
}

#[test]
fn encoded_values_decode_back_to_the_original() {
    let original = sample();
    let encoded = to_value(&original).unwrap();
    let mut decoded = Deployment::default();
    decode(&encoded, &mut decoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn encoding_shows_the_shape() {
    let encoded = to_value(&sample()).unwrap();
    let limits = encoded.get("limits").unwrap();
    assert_eq!(limits, &value!({ "cpu": 1.5, "memory": 1099511627776u64, "burst": null }));
    assert_eq!(encoded.get("initial"), Some(&value!("f")));
    assert!(encoded.get("fallback").unwrap().get("fallback").unwrap().is_null());
}

#![cfg(feature = "serde")]

use chained_multimap::{ChainedMultimap, ChainedSet};

#[test]
fn map_serializes_keys_to_value_sequences() {
    let mut map = ChainedMultimap::new();
    map.insert("Texas", 4.2);
    map.insert("Texas", 3.1);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"Texas":[4.2,3.1]}"#);
}

#[test]
fn map_round_trips_through_json() {
    let mut map = ChainedMultimap::new();
    map.insert("Texas", 4.2);
    map.insert("Texas", 3.1);
    map.insert("Nevada", 2.5);

    let json = serde_json::to_string(&map).unwrap();
    let back: ChainedMultimap<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), map.len());
    assert_eq!(back.get("Texas"), map.get("Texas"));
    assert_eq!(back.get("Nevada"), map.get("Nevada"));
}

#[test]
fn set_round_trips_through_json() {
    let set = ChainedSet::from(["Texas", "Nevada", "Alaska"]);

    let json = serde_json::to_string(&set).unwrap();
    let back: ChainedSet = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), 3);
    for member in set.iter() {
        assert!(back.contains(member));
    }
}

#[test]
fn set_deserialization_collapses_duplicates() {
    let back: ChainedSet = serde_json::from_str(r#"["Texas","Texas","Nevada"]"#).unwrap();

    assert_eq!(back.len(), 2);
    assert!(back.contains("Texas"));
    assert!(back.contains("Nevada"));
}

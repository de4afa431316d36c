//! Property tests for nested document traversal.

use cachette::{access_nested, LookupError};
use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::{json, Value};

/// Build a document whose only chain of keys is `path`, ending at `leaf`.
fn nest(path: &[String], leaf: Value) -> Value {
    path.iter().rev().fold(leaf, |acc, key| {
        let mut map = serde_json::Map::new();
        map.insert(key.clone(), acc);
        Value::Object(map)
    })
}

proptest! {
    #[test]
    fn resolving_a_known_path_returns_the_leaf(
        path in prop::collection::vec("[a-z]{1,8}", 1..5),
        leaf in any::<i64>(),
    ) {
        let doc = nest(&path, json!(leaf));
        prop_assert_eq!(access_nested(&doc, &path).unwrap(), &json!(leaf));
    }

    #[test]
    fn descending_past_the_leaf_reports_the_extra_key(
        path in prop::collection::vec("[a-z]{1,8}", 1..5),
        extra in "[a-z]{1,8}",
        leaf in any::<i64>(),
    ) {
        let doc = nest(&path, json!(leaf));
        let mut probe = path.clone();
        probe.push(extra.clone());
        prop_assert_eq!(
            access_nested(&doc, &probe),
            Err(LookupError::KeyNotFound(extra))
        );
    }

    #[test]
    fn the_first_missing_key_is_the_one_reported(
        path in prop::collection::vec("[a-z]{1,8}", 1..5),
        replacement in "[a-z]{1,8}",
        position in any::<Index>(),
        leaf in any::<i64>(),
    ) {
        let position = position.index(path.len());
        prop_assume!(path[position] != replacement);

        let doc = nest(&path, json!(leaf));
        let mut probe = path.clone();
        probe[position] = replacement.clone();
        prop_assert_eq!(
            access_nested(&doc, &probe),
            Err(LookupError::KeyNotFound(replacement))
        );
    }
}

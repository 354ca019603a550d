//! Loading table items from JSON files.
//!
//! Two layouts are accepted: an object mapping keys to values, and an array of
//! `[key, value]` pairs. Pair arrays keep their order and may contain duplicate
//! keys, which the table build then rejects.
//!
//! Objects are read through `serde_json::Map`, which is key-sorted without the
//! `preserve_order` feature, so object items come out in ascending key order rather
//! than file order. A repeated object key keeps only its last value. Use the pair
//! layout when construction order matters.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::data_structures::paa_perfect_hash::{PaaPerfectHash, PaaPerfectHashConfig};
use crate::error::PaaResult;

/// Table type built from an item file.
pub type ItemTable = PaaPerfectHash<String, Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemFile {
    Object(Map<String, Value>),
    Pairs(Vec<(String, Value)>),
}

/// Parses items from JSON text.
pub fn parse_items(json: &str) -> PaaResult<Vec<(String, Value)>> {
    let items = match serde_json::from_str(json)? {
        ItemFile::Object(map) => map.into_iter().collect(),
        ItemFile::Pairs(pairs) => pairs,
    };
    Ok(items)
}

/// Reads and parses items from a JSON file.
pub fn load_items(path: &Path) -> PaaResult<Vec<(String, Value)>> {
    let text = std::fs::read_to_string(path)?;
    let items = parse_items(&text)?;
    debug!(path = %path.display(), items = items.len(), "Loaded item file");
    Ok(items)
}

/// Builds a table from an item file.
pub fn build_from_file(path: &Path, config: PaaPerfectHashConfig) -> PaaResult<ItemTable> {
    let items = load_items(path)?;
    Ok(PaaPerfectHash::with_config(items, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::paa_perfect_hash::PaaPerfectHashError;
    use crate::error::PaaError;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_object_sorts_keys() {
        let items = parse_items(r#"{"b": 2, "a": {"nested": true}}"#).unwrap();
        assert_eq!(
            items,
            vec![
                ("a".to_string(), json!({"nested": true})),
                ("b".to_string(), json!(2)),
            ]
        );
    }

    #[test]
    fn test_parse_object_repeated_key_keeps_last() {
        let items = parse_items(r#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(items, vec![("k".to_string(), json!(2))]);
    }

    #[test]
    fn test_parse_pairs_keeps_order() {
        let items = parse_items(r#"[["z", 1], ["y", "two"], ["x", null]]"#).unwrap();
        let keys: Vec<&str> = items.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
        assert_eq!(items[1].1, json!("two"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(parse_items("42"), Err(PaaError::Serialization(_))));
        assert!(matches!(parse_items("[[1, 2]]"), Err(PaaError::Serialization(_))));
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"a": 1, "b": 2, "c": 3}"#).unwrap();

        let table = build_from_file(&path, PaaPerfectHashConfig::default()).unwrap();
        assert_eq!(table.get("b"), Some(&json!(2)));
        assert_eq!(table.get("z"), None);
    }

    #[test]
    fn test_build_from_file_with_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dups.json");
        fs::write(&path, r#"[["x", 1], ["x", 2]]"#).unwrap();

        let err = build_from_file(&path, PaaPerfectHashConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PaaError::Build(PaaPerfectHashError::DuplicateKey { first: 0, second: 1 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_items(Path::new("/nonexistent/items.json")).unwrap_err();
        assert!(matches!(err, PaaError::Io(_)));
    }
}

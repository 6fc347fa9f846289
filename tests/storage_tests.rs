// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the JSON file store

use dashboard_locale::storage::{FileStore, KeyValueStore, StoreError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_reopen_sees_last_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("locale", "en").unwrap();
    store.set("locale", "zh").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("locale").as_deref(), Some("zh"));
}

#[test]
fn test_foreign_keys_are_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"theme": "dark", "locale": "zh"}"#).unwrap();

    let mut store = FileStore::open(&path).unwrap();
    store.set("locale", "en").unwrap();

    let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["theme"], "dark");
    assert_eq!(on_disk["locale"], "en");
}

#[test]
fn test_non_string_values_open_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"locale": 3}"#).unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("locale"), None);
}

#[test]
fn test_truncated_file_is_replaced_on_next_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"locale": "e"#).unwrap();

    let mut store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("locale"), None);
    store.set("locale", "en").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("locale").as_deref(), Some("en"));
}

#[test]
fn test_failed_write_leaves_value_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let mut store = FileStore::open(&path).unwrap();

    // A directory in place of the file makes every flush fail.
    fs::create_dir(&path).unwrap();
    let err = store.set("locale", "en").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(store.get("locale"), None);
}

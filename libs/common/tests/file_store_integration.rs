//! Integration tests for the on-disk document store
//!
//! These tests write real files under the system temp directory and check
//! that documents survive a fresh store instance, the way they survive a
//! process restart.

use std::sync::Arc;

use common::{DocumentStore, Documents, JsonFileStore};
use serde::{Deserialize, Serialize};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: i64,
    name: String,
}

#[tokio::test]
async fn test_documents_survive_new_store_instance() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("documents");

    let first = Documents::new(Arc::new(JsonFileStore::new(&root)));
    let entries = vec![
        Entry { id: 1, name: "Ann".into() },
        Entry { id: 2, name: "Bo".into() },
    ];
    first.write_records("entries", &entries).await?;

    let second = Documents::new(Arc::new(JsonFileStore::new(&root)));
    let reloaded: Vec<Entry> = second.read_records("entries").await;
    assert_eq!(reloaded, entries, "file store round trip failed");

    Ok(())
}

#[tokio::test]
async fn test_document_file_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("documents");
    let store = JsonFileStore::new(&root);

    assert!(!store.exists("entries").await?);
    assert_eq!(store.load("entries").await?, None);

    let docs = Documents::new(Arc::new(store.clone()));
    docs.write_records("entries", &[Entry { id: 7, name: "Cy".into() }])
        .await?;

    let path = store.path_for("entries");
    assert_eq!(path, root.join("entries.json"));
    let text = std::fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value, serde_json::json!([{ "id": 7, "name": "Cy" }]));

    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("documents");
    std::fs::create_dir_all(&root)?;
    std::fs::write(root.join("entries.json"), "this is not json")?;

    let docs = Documents::new(Arc::new(JsonFileStore::new(&root)));
    let entries: Vec<Entry> = docs.read_records("entries").await;
    assert!(entries.is_empty());

    Ok(())
}

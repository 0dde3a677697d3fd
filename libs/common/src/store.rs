//! Document storage module for the student roster application
//!
//! Every record type lives in one named document holding a pretty-printed
//! JSON array. Documents are always read and written whole: there are no
//! partial writes, no appends, no indexes and no locking. Two concurrent
//! read-modify-write cycles on the same document can therefore lose one
//! side's update; callers that care must inject a backend that serializes
//! access.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

/// Raw byte-level access to named documents
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Load the full contents of a document, `None` if it does not exist
    async fn load(&self, name: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the full contents of a document
    async fn save(&self, name: &str, contents: &[u8]) -> StoreResult<()>;

    /// Check whether a document exists
    async fn exists(&self, name: &str) -> StoreResult<bool>;
}

/// Stores each document as `<root>/<name>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a file store rooted at `root`
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing a document
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, name: &str) -> StoreResult<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn save(&self, name: &str, contents: &[u8]) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path_for(name), contents).await?;
        Ok(())
    }

    async fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(tokio::fs::try_exists(self.path_for(name)).await?)
    }
}

/// Keeps documents in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryDocumentStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(&self, name: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.documents.lock().await.get(name).cloned())
    }

    async fn save(&self, name: &str, contents: &[u8]) -> StoreResult<()> {
        self.documents
            .lock()
            .await
            .insert(name.to_string(), contents.to_vec());
        Ok(())
    }

    async fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.documents.lock().await.contains_key(name))
    }
}

/// Typed gateway over a [`DocumentStore`]
///
/// Reading never fails: a missing, unreadable or malformed document is
/// reported as an empty list.
#[derive(Clone)]
pub struct Documents {
    store: Arc<dyn DocumentStore>,
}

impl Documents {
    /// Wrap a document backend
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read every record of a document
    pub async fn read_records<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let bytes = match self.store.load(name).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(document = name, error = %e, "failed to load document");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!(document = name, error = %e, "document is not a valid record list");
                Vec::new()
            }
        }
    }

    /// Overwrite a document with the given records
    pub async fn write_records<T: Serialize>(&self, name: &str, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(records)?;
        self.store.save(name, &json).await
    }

    /// Write `initial` only when the document does not exist yet
    ///
    /// Returns `true` when the document was created.
    pub async fn seed_if_absent<T: Serialize>(&self, name: &str, initial: &[T]) -> StoreResult<bool> {
        if self.store.exists(name).await? {
            return Ok(false);
        }

        info!(document = name, records = initial.len(), "seeding document");
        self.write_records(name, initial).await?;
        Ok(true)
    }
}

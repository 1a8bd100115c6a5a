//! Whole-document persistence.
//!
//! A [`DocumentStore`] only knows how to load and replace the entire
//! document; there are no partial updates and no indexes. [`JsonFileStore`]
//! is the production backend, [`MemoryStore`] keeps the serialized document
//! in process for tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::document::Document;
use crate::seed::seed_document;

/// Load/replace access to the persisted document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Make sure a document exists, writing the seed document if it does
    /// not. Never overwrites an existing document.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Load and parse the entire document.
    async fn read(&self) -> Result<Document, StoreError>;

    /// Serialize `doc` and replace the stored document with it.
    async fn write(&self, doc: &Document) -> Result<(), StoreError>;
}

/// Pretty-printed with two-space indentation, keys in struct order.
fn encode(doc: &Document) -> Result<String, StoreError> {
    serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)
}

fn decode(raw: &str) -> Result<Document, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Parse)
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// The document as a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(StoreError::io("create directory", dir))?;
        }

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(StoreError::io("stat", &self.path))?;
        if exists {
            tracing::debug!(path = %self.path.display(), "Document already present");
            return Ok(());
        }

        self.write(&seed_document()).await?;
        tracing::info!(path = %self.path.display(), "Seed document written");
        Ok(())
    }

    async fn read(&self) -> Result<Document, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::io("read", &self.path))?;
        decode(&raw)
    }

    async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        let raw = encode(doc)?;
        fs::write(&self.path, raw)
            .await
            .map_err(StoreError::io("write", &self.path))?;
        tracing::debug!(path = %self.path.display(), "Document written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Keeps the serialized document in memory.
///
/// Goes through the same encode/decode path as the file store, so reads
/// return fresh copies and a store that was never initialized fails to read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    /// An empty store; `initialize` will seed it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `doc`.
    pub fn with_document(doc: &Document) -> Result<Self, StoreError> {
        Ok(Self {
            raw: Mutex::new(Some(encode(doc)?)),
        })
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut raw = self.raw.lock().await;
        if raw.is_none() {
            *raw = Some(encode(&seed_document())?);
        }
        Ok(())
    }

    async fn read(&self) -> Result<Document, StoreError> {
        let raw = self.raw.lock().await;
        raw.as_deref()
            .ok_or(StoreError::Uninitialized)
            .and_then(decode)
    }

    async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        let encoded = encode(doc)?;
        *self.raw.lock().await = Some(encoded);
        Ok(())
    }
}

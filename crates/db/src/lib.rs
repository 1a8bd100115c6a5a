//! Persistence for the portfolio content document.
//!
//! The whole site lives in one [`Document`] behind a [`DocumentStore`].
//! [`Database`] is the handle the HTTP layer holds: it serializes every
//! read-modify-write cycle so concurrent mutations cannot overwrite each
//! other.

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use error::StoreError;
pub use models::document::Document;
pub use store::{DocumentStore, JsonFileStore, MemoryStore};

/// Shared handle over a [`DocumentStore`].
pub struct Database {
    store: Arc<dyn DocumentStore>,
    /// Held for the full read-modify-write cycle.
    lock: Mutex<()>,
}

impl Database {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Seed the store if it holds no document yet.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.store.initialize().await
    }

    /// Read the current document.
    pub async fn snapshot(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.lock().await;
        self.store.read().await
    }

    /// Run `f` against the current document and persist the result.
    ///
    /// If `f` returns `Err`, its in-memory changes are discarded and nothing
    /// is written. If the write itself fails, the stored document is left as
    /// it was and the mutation (activity entry included) is lost.
    pub async fn transact<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.store.read().await?;
        let out = f(&mut doc)?;
        self.store.write(&doc).await?;
        Ok(out)
    }
}

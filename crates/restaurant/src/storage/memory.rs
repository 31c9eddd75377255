//! In-memory store, mainly for tests. Contents are kept in the on-disk text format so the
//! codec is exercised the same way as with [`FileStore`](super::FileStore).

use super::codec::{format_quantity_table, format_reorder_requests, parse_quantity_table};
use super::{InventoryStore, StorageError, Table, REQUESTS_FILE};
use crate::inventory::ReorderRequest;
use crate::model::IngredientMap;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Clones share the same contents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    files: Arc<RwLock<HashMap<&'static str, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table with raw file text.
    pub async fn put_table(&self, table: Table, text: impl Into<String>) {
        self.files
            .write()
            .await
            .insert(table.file_name(), text.into());
    }

    /// Raw text of a table, if it was ever written.
    pub async fn table_text(&self, table: Table) -> Option<String> {
        self.files.read().await.get(table.file_name()).cloned()
    }

    /// Raw text of the reorder file, if it was ever written.
    pub async fn requests_text(&self) -> Option<String> {
        self.files.read().await.get(REQUESTS_FILE).cloned()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn load_table(&self, table: Table) -> Result<IngredientMap, StorageError> {
        match self.files.read().await.get(table.file_name()) {
            Some(text) => Ok(parse_quantity_table(text)?),
            None => Ok(IngredientMap::new()),
        }
    }

    async fn save_table(&self, table: Table, entries: &IngredientMap) -> Result<(), StorageError> {
        self.put_table(table, format_quantity_table(entries)).await;
        Ok(())
    }

    async fn save_requests(&self, requests: &[ReorderRequest]) -> Result<(), StorageError> {
        self.files
            .write()
            .await
            .insert(REQUESTS_FILE, format_reorder_requests(requests));
        Ok(())
    }
}

//! File-backed store: one text file per table inside a data directory.

use super::codec::{format_quantity_table, format_reorder_requests, parse_quantity_table};
use super::{InventoryStore, StorageError, Table, REQUESTS_FILE};
use crate::inventory::ReorderRequest;
use crate::model::IngredientMap;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn write(&self, file_name: &str, contents: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.data_dir.join(file_name);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents).await?;
        fs::rename(&temp_path, &path).await?;
        debug!(path = %path.display(), "File rewritten");
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for FileStore {
    async fn load_table(&self, table: Table) -> Result<IngredientMap, StorageError> {
        let path = self.data_dir.join(table.file_name());
        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No file yet, starting empty");
                return Ok(IngredientMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(parse_quantity_table(&text)?)
    }

    async fn save_table(&self, table: Table, entries: &IngredientMap) -> Result<(), StorageError> {
        self.write(table.file_name(), format_quantity_table(entries))
            .await
    }

    async fn save_requests(&self, requests: &[ReorderRequest]) -> Result<(), StorageError> {
        self.write(REQUESTS_FILE, format_reorder_requests(requests))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table(entries: &[(&str, u32)]) -> IngredientMap {
        entries.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    }

    #[tokio::test]
    async fn test_missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load_table(Table::Stock).await.unwrap().is_empty());
        assert!(store.load_table(Table::Minimum).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stock_table_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        let stock = table(&[("bun", 5), ("cheese slice", 0), ("patty", 12)]);

        store.save_table(Table::Stock, &stock).await.unwrap();
        assert_eq!(store.load_table(Table::Stock).await.unwrap(), stock);

        let on_disk = std::fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
        assert_eq!(on_disk, "bun | 5\ncheese slice | 0\npatty | 12\n");
        assert!(!dir.path().join("inventory.tmp").exists());
    }

    #[tokio::test]
    async fn test_tables_are_separate_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save_table(Table::Minimum, &table(&[("bun", 3)]))
            .await
            .unwrap();

        assert!(store.load_table(Table::Stock).await.unwrap().is_empty());
        assert_eq!(
            store.load_table(Table::Minimum).await.unwrap(),
            table(&[("bun", 3)])
        );
    }

    #[tokio::test]
    async fn test_requests_are_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store
            .save_requests(&[ReorderRequest::new("bun", 20), ReorderRequest::new("patty", 20)])
            .await
            .unwrap();
        store
            .save_requests(&[ReorderRequest::new("lettuce", 20)])
            .await
            .unwrap();

        let on_disk = std::fs::read_to_string(dir.path().join("nested/requests.txt")).unwrap();
        assert_eq!(on_disk, "lettuce x 20\n");
    }

    #[tokio::test]
    async fn test_malformed_table_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("minimums.txt"), "bun | 3\nbun three\n").unwrap();
        let store = FileStore::new(dir.path());

        let err = store.load_table(Table::Minimum).await.unwrap_err();
        assert!(matches!(err, StorageError::Codec(ref e) if e.line == 2));
    }
}

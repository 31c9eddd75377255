//! Persistence for the inventory ledger.
//!
//! The ledger's tables are plain text files (see [`codec`] for the line formats). Every
//! save rewrites the whole file; there is no transaction across files.

use crate::inventory::ReorderRequest;
use crate::model::IngredientMap;
use async_trait::async_trait;
use codec::CodecError;
use thiserror::Error;

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// File the reorder requests of the current shipment cycle are written to.
pub const REQUESTS_FILE: &str = "requests.txt";

/// The two `<name> | <integer>` tables the inventory keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Stock,
    Minimum,
}

impl Table {
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Stock => "inventory.txt",
            Table::Minimum => "minimums.txt",
        }
    }
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A stored file does not parse.
    #[error("Malformed data: {0}")]
    Codec(#[from] CodecError),
}

/// Backend interface for the inventory's persisted state.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Reads a table; a table that was never written is empty.
    async fn load_table(&self, table: Table) -> Result<IngredientMap, StorageError>;

    /// Overwrites a table.
    async fn save_table(&self, table: Table, entries: &IngredientMap) -> Result<(), StorageError>;

    /// Overwrites the reorder file with `requests`.
    async fn save_requests(&self, requests: &[ReorderRequest]) -> Result<(), StorageError>;
}

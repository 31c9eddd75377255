//! # Inventory Ledger
//!
//! Owns every ingredient's stock quantity and minimum, and issues reorder requests when
//! stock drops below the minimum.
//!
//! ## Structure
//!
//! - [`state`] - [`InventoryLedger`] and [`ReorderRequest`]
//! - [`error`] - [`InventoryError`]
//! - [`commands`] - [`InventoryCommand`] and [`InventoryReply`]
//! - [`ledger`] - hosts the ledger in a [`LedgerActor`], persisting through an
//!   [`InventoryStore`](crate::storage::InventoryStore)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant::clients::InventoryClient;
//! use restaurant::inventory::{self, InventoryLedger};
//! use restaurant::model::IngredientMap;
//! use restaurant::storage::{InventoryStore, MemoryStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store: Arc<dyn InventoryStore> = Arc::new(MemoryStore::new());
//!     let (actor, generic_client) = inventory::new(InventoryLedger::new(), 32);
//!     let client = InventoryClient::new(generic_client);
//!     tokio::spawn(actor.run(store));
//!
//!     client.receive_shipment(IngredientMap::from([("bun".to_string(), 30)])).await?;
//!     client.consume(IngredientMap::from([("bun".to_string(), 2)])).await?;
//!     assert_eq!(client.stock("bun").await?, Some(28));
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod error;
pub mod ledger;
pub mod state;

pub use commands::*;
pub use error::*;
pub use state::*;

use ledger_actor::{LedgerActor, LedgerClient};

/// Creates a new inventory actor around `ledger` and its client.
pub fn new(
    ledger: InventoryLedger,
    capacity: usize,
) -> (LedgerActor<InventoryLedger>, LedgerClient<InventoryLedger>) {
    LedgerActor::new(ledger, capacity)
}

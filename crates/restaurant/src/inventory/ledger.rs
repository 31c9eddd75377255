//! [`Ledger`] implementation for [`InventoryLedger`].
//!
//! The actor's context is the [`InventoryStore`]. Tables are loaded in `on_start`; after a
//! command succeeds the affected files are rewritten. A failed write is logged and does not
//! undo the in-memory change.

use super::commands::{InventoryCommand, InventoryReply};
use crate::inventory::{InventoryError, InventoryLedger};
use crate::storage::{InventoryStore, StorageError, Table};
use async_trait::async_trait;
use ledger_actor::Ledger;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
impl Ledger for InventoryLedger {
    type Command = InventoryCommand;
    type Reply = InventoryReply;
    type Context = Arc<dyn InventoryStore>;
    type Error = InventoryError;

    async fn on_start(&mut self, store: &Arc<dyn InventoryStore>) -> Result<(), InventoryError> {
        match (
            store.load_table(Table::Stock).await,
            store.load_table(Table::Minimum).await,
        ) {
            (Ok(stock), Ok(minimums)) => {
                info!(
                    ingredients = stock.len(),
                    minimums = minimums.len(),
                    "Inventory loaded"
                );
                self.restore(stock, minimums);
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Could not load inventory, starting from current state");
            }
        }
        // each run starts a fresh shipment cycle
        persisted("reorder requests", store.save_requests(self.reorder_requests()).await);
        Ok(())
    }

    async fn handle(
        &mut self,
        command: InventoryCommand,
        store: &Arc<dyn InventoryStore>,
    ) -> Result<InventoryReply, InventoryError> {
        match command {
            InventoryCommand::Initialize(names) => {
                let outcome = self.initialize(names);
                if !outcome.defaulted_minimums.is_empty() {
                    persisted(
                        "minimums",
                        store.save_table(Table::Minimum, self.minimum_table()).await,
                    );
                }
                if !outcome.reorders.is_empty() {
                    persisted("reorder requests", store.save_requests(self.reorder_requests()).await);
                }
                Ok(InventoryReply::Initialize(outcome))
            }
            InventoryCommand::Consume(required) => {
                let issued = self.consume(&required)?;
                persisted("stock", store.save_table(Table::Stock, self.stock_table()).await);
                if !issued.is_empty() {
                    persisted("reorder requests", store.save_requests(self.reorder_requests()).await);
                }
                Ok(InventoryReply::Consume(issued))
            }
            InventoryCommand::ReceiveShipment(shipment) => {
                let issued = self.receive_shipment(&shipment)?;
                persisted("stock", store.save_table(Table::Stock, self.stock_table()).await);
                persisted("reorder requests", store.save_requests(self.reorder_requests()).await);
                Ok(InventoryReply::ReceiveShipment(issued))
            }
            InventoryCommand::AddOrUpdate { ingredient, delta } => {
                self.add_or_update(&ingredient, delta)?;
                persisted("stock", store.save_table(Table::Stock, self.stock_table()).await);
                Ok(InventoryReply::AddOrUpdate(()))
            }
            InventoryCommand::Stock(ingredient) => Ok(InventoryReply::Stock(self.stock(&ingredient))),
            InventoryCommand::Report => Ok(InventoryReply::Report(self.to_string())),
        }
    }
}

fn persisted(what: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        warn!(error = %e, "Failed to persist {}", what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InventoryClient;
    use crate::inventory::{self, ReorderRequest};
    use crate::model::IngredientMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A store whose disk is always full.
    #[derive(Default)]
    struct FailingStore {
        attempts: AtomicUsize,
    }

    impl FailingStore {
        fn fail(&self) -> Result<(), StorageError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    #[async_trait]
    impl InventoryStore for FailingStore {
        async fn load_table(&self, _table: Table) -> Result<IngredientMap, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }

        async fn save_table(&self, _table: Table, _entries: &IngredientMap) -> Result<(), StorageError> {
            self.fail()
        }

        async fn save_requests(&self, _requests: &[ReorderRequest]) -> Result<(), StorageError> {
            self.fail()
        }
    }

    fn map(entries: &[(&str, u32)]) -> IngredientMap {
        entries.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    }

    #[tokio::test]
    async fn test_failed_writes_do_not_undo_changes() {
        let store = Arc::new(FailingStore::default());
        let context: Arc<dyn InventoryStore> = store.clone();
        let ledger = InventoryLedger::from_tables(map(&[("bun", 12)]), map(&[("bun", 10)]));
        let (actor, client) = inventory::new(ledger, 8);
        let handle = tokio::spawn(actor.run(context));
        let client = InventoryClient::new(client);

        let issued = client.consume(map(&[("bun", 3)])).await.unwrap();
        assert_eq!(issued, vec![ReorderRequest::new("bun", 20)]);
        assert_eq!(client.stock("bun").await.unwrap(), Some(9));

        let issued = client.receive_shipment(map(&[("bun", 20), ("rice", 30)])).await.unwrap();
        assert!(issued.is_empty());
        assert_eq!(client.stock("bun").await.unwrap(), Some(29));
        assert_eq!(client.stock("rice").await.unwrap(), Some(30));

        client.add_or_update("rice", 5).await.unwrap();
        assert_eq!(client.stock("rice").await.unwrap(), Some(35));

        // start-up, consume (stock and requests), shipment (stock and requests), add
        assert_eq!(store.attempts.load(Ordering::SeqCst), 6);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_overflowing_shipment_is_rejected_by_the_actor() {
        let store: Arc<dyn InventoryStore> = Arc::new(crate::storage::MemoryStore::new());
        let ledger = InventoryLedger::from_tables(
            map(&[("flour", u32::MAX), ("bun", 1)]),
            IngredientMap::new(),
        );
        let (actor, client) = inventory::new(ledger, 8);
        tokio::spawn(actor.run(store));
        let client = InventoryClient::new(client);

        let err = client
            .receive_shipment(map(&[("bun", 4), ("flour", 50)]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::StockOverflow {
                ingredient: "flour".to_string(),
                held: u32::MAX,
                added: 50
            }
        );
        assert_eq!(client.stock("flour").await.unwrap(), Some(u32::MAX));
        assert_eq!(client.stock("bun").await.unwrap(), Some(1));
    }
}

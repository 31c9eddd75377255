//! # Inventory Client
//!
//! High-level API for the inventory actor.

use crate::inventory::{
    Initialized, InventoryCommand, InventoryError, InventoryLedger, InventoryReply, ReorderRequest,
};
use crate::model::IngredientMap;
use async_trait::async_trait;
use ledger_actor::{FrameworkError, LedgerClient, LedgerHandle};
use tracing::{debug, instrument};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: LedgerClient<InventoryLedger>,
}

impl InventoryClient {
    pub fn new(inner: LedgerClient<InventoryLedger>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LedgerHandle<InventoryLedger> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &LedgerClient<InventoryLedger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast::<InventoryError>()
            .unwrap_or_else(|e| InventoryError::ActorCommunicationError(e.to_string()))
    }
}

impl InventoryClient {
    /// Registers the menu's ingredients and runs the start-up reorder sweep.
    #[instrument(skip(self, names))]
    pub async fn initialize(&self, names: Vec<String>) -> Result<Initialized, InventoryError> {
        debug!("Initializing {} ingredient(s)", names.len());
        match self.send(InventoryCommand::Initialize(names)).await? {
            InventoryReply::Initialize(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    /// Deducts `required` all at once.
    ///
    /// Returns the reorder requests this consumption triggered.
    #[instrument(skip(self))]
    pub async fn consume(
        &self,
        required: IngredientMap,
    ) -> Result<Vec<ReorderRequest>, InventoryError> {
        match self.send(InventoryCommand::Consume(required)).await? {
            InventoryReply::Consume(issued) => Ok(issued),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn receive_shipment(
        &self,
        shipment: IngredientMap,
    ) -> Result<Vec<ReorderRequest>, InventoryError> {
        match self.send(InventoryCommand::ReceiveShipment(shipment)).await? {
            InventoryReply::ReceiveShipment(issued) => Ok(issued),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_or_update(&self, ingredient: &str, delta: u32) -> Result<(), InventoryError> {
        let command = InventoryCommand::AddOrUpdate {
            ingredient: ingredient.to_string(),
            delta,
        };
        match self.send(command).await? {
            InventoryReply::AddOrUpdate(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn stock(&self, ingredient: &str) -> Result<Option<u32>, InventoryError> {
        match self.send(InventoryCommand::Stock(ingredient.to_string())).await? {
            InventoryReply::Stock(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// One `<name> x <quantity>` line per ingredient.
    #[instrument(skip(self))]
    pub async fn report(&self) -> Result<String, InventoryError> {
        match self.send(InventoryCommand::Report).await? {
            InventoryReply::Report(report) => Ok(report),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: InventoryReply) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected reply {reply:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_actor::mock::{create_mock_client, expect_execute, expect_snapshot, MockClient};

    #[tokio::test]
    async fn test_consume_returns_issued_requests() {
        let (client, mut receiver) = create_mock_client::<InventoryLedger>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move {
            inventory_client
                .consume(IngredientMap::from([("bun".to_string(), 2)]))
                .await
        });

        let (command, responder) = expect_execute(&mut receiver)
            .await
            .expect("Expected Execute request");
        match command {
            InventoryCommand::Consume(required) => assert_eq!(required["bun"], 2),
            other => panic!("Expected Consume, got {other:?}"),
        }
        responder
            .send(Ok(InventoryReply::Consume(vec![ReorderRequest::new("bun", 20)])))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap(),
            vec![ReorderRequest::new("bun", 20)]
        );
    }

    #[tokio::test]
    async fn test_insufficient_stock_comes_back_typed() {
        let mut mock = MockClient::<InventoryLedger>::new();
        mock.expect_execute()
            .return_rejected(InventoryError::InsufficientStock {
                ingredient: "patty".to_string(),
                requested: 3,
                available: 1,
            });
        let client = InventoryClient::new(mock.client());

        let err = client
            .consume(IngredientMap::from([("patty".to_string(), 3)]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                ingredient: "patty".to_string(),
                requested: 3,
                available: 1
            }
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_snapshot_is_provided_by_the_handle() {
        let (client, mut receiver) = create_mock_client::<InventoryLedger>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory_client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        let mut ledger = InventoryLedger::new();
        ledger.add_or_update("rice", 4).unwrap();
        responder.send(Ok(ledger)).unwrap();

        let snapshot = task.await.unwrap().unwrap();
        assert_eq!(snapshot.stock("rice"), Some(4));
    }

    #[tokio::test]
    async fn test_dropped_actor_is_a_communication_error() {
        let mut mock = MockClient::<InventoryLedger>::new();
        mock.expect_execute().return_err(FrameworkError::ActorDropped);
        let client = InventoryClient::new(mock.client());

        assert!(matches!(
            client.report().await,
            Err(InventoryError::ActorCommunicationError(_))
        ));
    }
}

//! Commands accepted by the inventory actor.

use crate::inventory::{Initialized, ReorderRequest};
use crate::model::IngredientMap;

/// Operations on the inventory ledger.
#[derive(Debug, Clone)]
pub enum InventoryCommand {
    /// Ensures the named ingredients exist and every ingredient has a minimum.
    Initialize(Vec<String>),
    /// Deducts the mapping atomically.
    ///
    /// # Errors
    /// Fails with `UnknownIngredient` or `InsufficientStock`; nothing is deducted then.
    Consume(IngredientMap),
    /// Adds a delivery and starts a new shipment cycle.
    ReceiveShipment(IngredientMap),
    /// Adds `delta` units to one ingredient.
    AddOrUpdate { ingredient: String, delta: u32 },
    /// Current quantity of one ingredient.
    Stock(String),
    /// The manager-facing stock report.
    Report,
}

/// Results from InventoryCommands - variants match 1:1 with InventoryCommand
#[derive(Debug, Clone)]
pub enum InventoryReply {
    Initialize(Initialized),
    /// Requests issued by the post-consumption sweep.
    Consume(Vec<ReorderRequest>),
    /// Requests of the new cycle.
    ReceiveShipment(Vec<ReorderRequest>),
    AddOrUpdate(()),
    Stock(Option<u32>),
    Report(String),
}

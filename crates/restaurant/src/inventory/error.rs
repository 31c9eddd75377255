//! Error types for the inventory ledger.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The ingredient has no stock entry.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient {ingredient}: requested {requested}, available {available}")]
    InsufficientStock {
        ingredient: String,
        requested: u32,
        available: u32,
    },

    /// Adding the delivered units would exceed what a stock entry can hold.
    #[error("Stock of {ingredient} overflows: holding {held}, adding {added}")]
    StockOverflow {
        ingredient: String,
        held: u32,
        added: u32,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

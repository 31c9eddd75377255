//! Error types for the order tracker.

use crate::model::OrderId;
use crate::tracker::Stage;
use thiserror::Error;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackerError {
    /// The order is already waiting in Placed.
    #[error("order {0} has already been placed")]
    DuplicateOrder(OrderId),

    /// The order is not in the stage the transition starts from.
    #[error("order {order} is not in stage {expected}")]
    InvalidTransition { order: OrderId, expected: Stage },

    /// The order has already been confirmed as delivered.
    #[error("order {0} has already been completed")]
    AlreadyCompleted(OrderId),

    /// No order with this id in the named stage.
    #[error("order {order} not found in stage {stage}")]
    NotFound { order: OrderId, stage: Stage },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

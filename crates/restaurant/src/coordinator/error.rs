//! Why an event could not be applied.

use crate::coordinator::{EventError, EventKind, Role};
use crate::inventory::InventoryError;
use crate::model::{OrderId, QuantityOverflow};
use crate::tracker::TrackerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinatorError {
    #[error("bad event record: {0}")]
    Event(#[from] EventError),

    #[error("{role} `{worker}` does not work here")]
    UnknownWorker { worker: String, role: Role },

    #[error("`{0}` is not on the menu")]
    UnknownDish(String),

    #[error("{0} needs an order number")]
    MissingOrderId(EventKind),

    #[error("bad notes: {0}")]
    MalformedNotes(String),

    #[error("order is too large: {0}")]
    Quantity(#[from] QuantityOverflow),

    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl CoordinatorError {
    /// The order the failure concerns, when there is one.
    pub fn order(&self) -> Option<OrderId> {
        match self {
            CoordinatorError::Tracker(
                TrackerError::DuplicateOrder(id) | TrackerError::AlreadyCompleted(id),
            ) => Some(*id),
            CoordinatorError::Tracker(
                TrackerError::InvalidTransition { order, .. } | TrackerError::NotFound { order, .. },
            ) => Some(*order),
            _ => None,
        }
    }
}

//! Commands accepted by the tracker actor.
//!
//! Each variant maps onto one [`OrderTracker`](super::OrderTracker) operation; see
//! [`impl Ledger for OrderTracker`](super::OrderTracker#impl-Ledger-for-OrderTracker).

use crate::model::{Order, OrderId};
use crate::tracker::Stage;

/// Lifecycle operations on the tracker.
#[derive(Debug, Clone)]
pub enum TrackerCommand {
    /// Enqueues a new order in Placed.
    Place(Order),
    /// Placed → Accepted.
    Accept(OrderId),
    /// Accepted → Prepared.
    MarkPrepared(OrderId),
    /// Removes a prepared order and returns it.
    Retrieve(OrderId),
    /// Appends an order to Delivered.
    ConfirmCompleted(Order),
    /// Returns a copy of the order if it is in `stage`.
    Find { order: OrderId, stage: Stage },
    /// Returns a copy of the oldest Placed order, if any.
    ChooseNext,
}

/// Results from TrackerCommands - variants match 1:1 with TrackerCommand
#[derive(Debug, Clone)]
pub enum TrackerReply {
    Place(()),
    Accept(()),
    MarkPrepared(()),
    Retrieve(Order),
    ConfirmCompleted(()),
    Find(Order),
    ChooseNext(Option<Order>),
}

//! The order lifecycle state machine.
//!
//! ```text
//! Placed --accept--> Accepted --mark_prepared--> Prepared --retrieve--> (handed back)
//! ```
//!
//! An order's stage is the collection that currently holds it. Each collection is a FIFO
//! queue, so iteration always follows arrival order.

use crate::model::{Order, OrderId};
use crate::tracker::TrackerError;
use std::collections::VecDeque;
use std::fmt::Display;

/// Lifecycle stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Placed,
    Accepted,
    Prepared,
    Delivered,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Placed => "Placed",
            Stage::Accepted => "Accepted",
            Stage::Prepared => "Prepared",
            Stage::Delivered => "Delivered",
        };
        write!(f, "{name}")
    }
}

/// Four FIFO collections, one per [`Stage`]. An order sits in at most one of them.
#[derive(Debug, Clone, Default)]
pub struct OrderTracker {
    placed: VecDeque<Order>,
    accepted: VecDeque<Order>,
    prepared: VecDeque<Order>,
    delivered: VecDeque<Order>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a freshly built order at the tail of Placed.
    ///
    /// # Errors
    /// [`TrackerError::DuplicateOrder`] if an order with the same id is already waiting in
    /// Placed. Other stages are not consulted; ids come from a sequence and never repeat.
    pub fn place(&mut self, order: Order) -> Result<(), TrackerError> {
        if position(&self.placed, order.id()).is_some() {
            return Err(TrackerError::DuplicateOrder(order.id()));
        }
        self.placed.push_back(order);
        Ok(())
    }

    /// A cook takes the order: Placed → Accepted.
    pub fn accept(&mut self, id: OrderId) -> Result<(), TrackerError> {
        let order = self.take(id, Stage::Placed)?;
        self.accepted.push_back(order);
        Ok(())
    }

    /// The kitchen is done: Accepted → Prepared.
    pub fn mark_prepared(&mut self, id: OrderId) -> Result<(), TrackerError> {
        let order = self.take(id, Stage::Accepted)?;
        self.prepared.push_back(order);
        Ok(())
    }

    /// Takes a prepared order out of the tracker and hands it to the caller, who then
    /// either confirms it or drops it (rejection).
    pub fn retrieve(&mut self, id: OrderId) -> Result<Order, TrackerError> {
        self.take(id, Stage::Prepared)
    }

    /// Records the order as delivered.
    ///
    /// Any order is accepted here, whether or not it went through [`retrieve`](Self::retrieve);
    /// the only rule is that it cannot be delivered twice.
    pub fn confirm_completed(&mut self, order: Order) -> Result<(), TrackerError> {
        if position(&self.delivered, order.id()).is_some() {
            return Err(TrackerError::AlreadyCompleted(order.id()));
        }
        self.delivered.push_back(order);
        Ok(())
    }

    /// Looks an order up in one stage.
    pub fn find(&self, id: OrderId, stage: Stage) -> Result<&Order, TrackerError> {
        self.queue(stage)
            .iter()
            .find(|o| o.id() == id)
            .ok_or(TrackerError::NotFound { order: id, stage })
    }

    /// The oldest order waiting for a cook.
    pub fn choose_next(&self) -> Option<&Order> {
        self.placed.front()
    }

    /// Orders in `stage`, oldest first.
    pub fn orders(&self, stage: Stage) -> impl Iterator<Item = &Order> {
        self.queue(stage).iter()
    }

    pub fn stage_of(&self, id: OrderId) -> Option<Stage> {
        [
            Stage::Placed,
            Stage::Accepted,
            Stage::Prepared,
            Stage::Delivered,
        ]
        .into_iter()
        .find(|stage| position(self.queue(*stage), id).is_some())
    }

    fn take(&mut self, id: OrderId, expected: Stage) -> Result<Order, TrackerError> {
        let queue = self.queue_mut(expected);
        position(queue, id)
            .and_then(|index| queue.remove(index))
            .ok_or(TrackerError::InvalidTransition {
                order: id,
                expected,
            })
    }

    fn queue(&self, stage: Stage) -> &VecDeque<Order> {
        match stage {
            Stage::Placed => &self.placed,
            Stage::Accepted => &self.accepted,
            Stage::Prepared => &self.prepared,
            Stage::Delivered => &self.delivered,
        }
    }

    fn queue_mut(&mut self, stage: Stage) -> &mut VecDeque<Order> {
        match stage {
            Stage::Placed => &mut self.placed,
            Stage::Accepted => &mut self.accepted,
            Stage::Prepared => &mut self.prepared,
            Stage::Delivered => &mut self.delivered,
        }
    }
}

fn position(queue: &VecDeque<Order>, id: OrderId) -> Option<usize> {
    queue.iter().position(|o| o.id() == id)
}

//! # Tracker Client
//!
//! High-level API for the order tracker actor. Wraps a `LedgerClient<OrderTracker>` and turns
//! each lifecycle operation into a typed method.

use crate::model::{Order, OrderId};
use crate::tracker::{OrderTracker, Stage, TrackerCommand, TrackerError, TrackerReply};
use async_trait::async_trait;
use ledger_actor::{FrameworkError, LedgerClient, LedgerHandle};
use tracing::{debug, instrument};

/// Client for interacting with the tracker actor.
#[derive(Clone)]
pub struct TrackerClient {
    inner: LedgerClient<OrderTracker>,
}

impl TrackerClient {
    pub fn new(inner: LedgerClient<OrderTracker>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LedgerHandle<OrderTracker> for TrackerClient {
    type Error = TrackerError;

    fn inner(&self) -> &LedgerClient<OrderTracker> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast::<TrackerError>()
            .unwrap_or_else(|e| TrackerError::ActorCommunicationError(e.to_string()))
    }
}

impl TrackerClient {
    /// Hands a freshly built order to the tracker.
    #[instrument(skip(self, order), fields(order = %order.id()))]
    pub async fn place(&self, order: Order) -> Result<(), TrackerError> {
        match self.send(TrackerCommand::Place(order)).await? {
            TrackerReply::Place(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn accept(&self, id: OrderId) -> Result<(), TrackerError> {
        match self.send(TrackerCommand::Accept(id)).await? {
            TrackerReply::Accept(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_prepared(&self, id: OrderId) -> Result<(), TrackerError> {
        match self.send(TrackerCommand::MarkPrepared(id)).await? {
            TrackerReply::MarkPrepared(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Takes a prepared order out of the tracker.
    #[instrument(skip(self))]
    pub async fn retrieve(&self, id: OrderId) -> Result<Order, TrackerError> {
        match self.send(TrackerCommand::Retrieve(id)).await? {
            TrackerReply::Retrieve(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, order), fields(order = %order.id()))]
    pub async fn confirm_completed(&self, order: Order) -> Result<(), TrackerError> {
        match self.send(TrackerCommand::ConfirmCompleted(order)).await? {
            TrackerReply::ConfirmCompleted(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// A copy of the order, if it is currently in `stage`.
    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId, stage: Stage) -> Result<Order, TrackerError> {
        debug!("Looking up order {} in {}", id, stage);
        match self.send(TrackerCommand::Find { order: id, stage }).await? {
            TrackerReply::Find(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    /// The oldest order waiting for a cook.
    #[instrument(skip(self))]
    pub async fn choose_next(&self) -> Result<Option<Order>, TrackerError> {
        match self.send(TrackerCommand::ChooseNext).await? {
            TrackerReply::ChooseNext(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: TrackerReply) -> TrackerError {
    TrackerError::ActorCommunicationError(format!("unexpected reply {reply:?}"))
}

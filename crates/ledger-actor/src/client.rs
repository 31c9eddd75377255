//! # Generic Client
//!
//! This module defines the generic client for communicating with a ledger actor.

use crate::error::FrameworkError;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `LedgerActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared across tasks.
/// Every call returns `Result<_, FrameworkError>`; a ledger's own rejection arrives as
/// [`FrameworkError::Rejected`].
pub struct LedgerClient<L: Ledger> {
    sender: mpsc::Sender<LedgerRequest<L>>,
}

impl<L: Ledger> Clone for LedgerClient<L> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<L: Ledger> LedgerClient<L> {
    pub fn new(sender: mpsc::Sender<LedgerRequest<L>>) -> Self {
        Self { sender }
    }

    pub async fn execute(&self, command: L::Command) -> Result<L::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Execute {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<L, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

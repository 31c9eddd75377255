//! # Generic Ledger Actor
//!
//! This module defines the `LedgerActor`, the server half of the runtime. It owns one ledger
//! value and the receiving end of its channel, and applies requests strictly one at a time.

use crate::client::LedgerClient;
use crate::error::FrameworkError;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that hosts a single ledger.
///
/// # Concurrency Model
/// Any number of `LedgerClient` clones may send requests concurrently, but the actor pulls
/// them off the channel one by one and awaits each handler to completion before receiving
/// the next. A command that fails validation therefore never observes, nor leaves behind,
/// a half-applied neighbour. No `Mutex` is needed around the ledger.
///
/// # Usage Pattern
///
/// 1.  **Create**: `LedgerActor::new(ledger, capacity)` returns the actor and its client.
/// 2.  **Wire**: pass the ledger's dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the future returned by `run` on the Tokio runtime.
///
/// ```rust
/// use ledger_actor::{Ledger, LedgerActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { total: u32 }
///
/// #[derive(Debug)]
/// enum TallyCommand { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("overflow")]
/// struct Overflow;
///
/// #[async_trait]
/// impl Ledger for Tally {
///     type Command = TallyCommand;
///     type Reply = u32;
///     type Context = ();
///     type Error = Overflow;
///
///     async fn handle(&mut self, command: TallyCommand, _: &()) -> Result<u32, Overflow> {
///         match command {
///             TallyCommand::Add(n) => {
///                 self.total = self.total.checked_add(n).ok_or(Overflow)?;
///                 Ok(self.total)
///             }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = LedgerActor::new(Tally::default(), 8);
///     tokio::spawn(actor.run(()));
///     assert_eq!(client.execute(TallyCommand::Add(2)).await.unwrap(), 2);
/// }
/// ```
pub struct LedgerActor<L: Ledger> {
    receiver: mpsc::Receiver<LedgerRequest<L>>,
    ledger: L,
}

impl<L: Ledger> LedgerActor<L> {
    /// Creates a new `LedgerActor` around `ledger` and its associated `LedgerClient`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The initial ledger state.
    /// * `buffer_size` - Capacity of the MPSC channel. When full, client calls wait for room.
    pub fn new(ledger: L, buffer_size: usize) -> (Self, LedgerClient<L>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, ledger };
        let client = LedgerClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook and handler call, so dependencies created after the
    /// actor (stores, other clients) can still be wired in.
    pub async fn run(mut self, context: L::Context) {
        // "InventoryLedger" rather than "restaurant::inventory::ledger::InventoryLedger"
        let ledger_type = std::any::type_name::<L>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.ledger.on_start(&context).await {
            warn!(ledger_type, error = %e, "on_start failed");
        }
        info!(ledger_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Execute {
                    command,
                    respond_to,
                } => {
                    debug!(ledger_type, ?command, "Execute");
                    let result = self
                        .ledger
                        .handle(command, &context)
                        .await
                        .map_err(|e| FrameworkError::Rejected(Box::new(e)));
                    match &result {
                        Ok(reply) => info!(ledger_type, ?reply, "Command ok"),
                        Err(e) => warn!(ledger_type, error = %e, "Command rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Snapshot { respond_to } => {
                    debug!(ledger_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.ledger.clone()));
                }
            }
        }

        if let Err(e) = self.ledger.on_stop(&context).await {
            warn!(ledger_type, error = %e, "on_stop failed");
        }
        info!(ledger_type, "Shutdown");
    }
}

//! # Ledger Trait
//!
//! The `Ledger` trait is the contract every stateful ledger (order tracker, inventory, ...)
//! implements to be hosted by the generic [`LedgerActor`](crate::LedgerActor). It names the
//! command vocabulary, the reply type, the injected context and the error type, and provides
//! the `on_start` / `on_stop` hooks around the message loop.
//!
//! # Architecture Note
//! A ledger is a *single* piece of state with invariants that span all of its entries
//! (FIFO queues, stock thresholds). Hosting it in one actor means every command runs to
//! completion before the next one is looked at, so the ledger itself never needs a lock.
//!
//! We use associated types (`Command`, `Reply`, `Error`, ...) so that an inventory client can
//! only ever send inventory commands, and always gets inventory errors back.
//!
//! # Provided Methods (Hooks)
//! - [`Ledger::on_start`]
//! - [`Ledger::on_stop`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any ledger must implement to be hosted by a `LedgerActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that hooks and handlers can await I/O (persistence,
/// other actors). The `Context` type is injected into every call at `run()` time
/// ("late binding"), which keeps construction free of dependencies.
#[async_trait]
pub trait Ledger: Clone + Send + Sync + 'static {
    /// Enum of operations the ledger accepts.
    type Command: Send + Sync + Debug;

    /// The reply returned by a successful command.
    type Reply: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor (`()` if none).
    type Context: Send + Sync;

    /// The error type for this ledger.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One enum per ledger rather than one per command. A `consume` can only fail with
    /// stock errors and a `receive_shipment` cannot fail at all, but both return the
    /// ledger's error type; callers match on the variants they care about.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first command is processed.
    /// Use this hook to load persisted state through the context.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies one command. Returning `Err` must leave the ledger unchanged.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;

    /// Called once after the channel closes and the loop has drained.
    async fn on_stop(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

//! # Ledger Messages
//!
//! This module defines the message types exchanged between a `LedgerClient` and its
//! `LedgerActor`.

use crate::error::FrameworkError;
use crate::ledger::Ledger;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// A ledger has exactly two kinds of traffic:
///
/// - **Execute**: apply one [`Ledger::Command`] and return its [`Ledger::Reply`].
/// - **Snapshot**: return a clone of the whole ledger state, without mutating it.
///
/// Because both variants are generic over `L: Ledger`, an inventory command cannot be
/// sent to the order tracker; the compiler rejects it.
#[derive(Debug)]
pub enum LedgerRequest<L: Ledger> {
    Execute {
        command: L::Command,
        respond_to: Response<L::Reply>,
    },
    Snapshot {
        respond_to: Response<L>,
    },
}

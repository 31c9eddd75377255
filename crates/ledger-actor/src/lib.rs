//! # Ledger Actor
//!
//! Building blocks for hosting a stateful ledger behind a Tokio actor: one task owns the
//! ledger, clients talk to it over channels, and every command runs to completion before the
//! next one starts.
//!
//! ## Why an actor per ledger?
//!
//! A ledger's invariants span its whole state: a stock check must see every ingredient before
//! any is deducted, a queue must keep arrival order. Giving the ledger a single owning task
//! serializes access without a lock, and lets any number of cloned clients share it.
//!
//! ## Architecture Overview
//!
//! 1. **Ledger Layer** ([`Ledger`]) - the state, its command vocabulary and its errors
//! 2. **Runtime Layer** ([`LedgerActor`]) - the message loop and hook calls
//! 3. **Interface Layer** ([`LedgerClient`], [`LedgerHandle`]) - type-safe requests
//!
//! ```rust
//! use ledger_actor::{Ledger, LedgerActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Pantry { jars: u32 }
//!
//! #[derive(Debug)]
//! enum PantryCommand { Stock(u32), Take(u32) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {available} jars left")]
//! struct Shortage { available: u32 }
//!
//! #[async_trait]
//! impl Ledger for Pantry {
//!     type Command = PantryCommand;
//!     type Reply = u32;
//!     type Context = ();
//!     type Error = Shortage;
//!
//!     async fn handle(&mut self, command: PantryCommand, _: &()) -> Result<u32, Shortage> {
//!         match command {
//!             PantryCommand::Stock(n) => self.jars += n,
//!             PantryCommand::Take(n) if n > self.jars => {
//!                 return Err(Shortage { available: self.jars })
//!             }
//!             PantryCommand::Take(n) => self.jars -= n,
//!         }
//!         Ok(self.jars)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = LedgerActor::new(Pantry::default(), 16);
//!     tokio::spawn(actor.run(()));
//!
//!     client.execute(PantryCommand::Stock(3)).await.unwrap();
//!     let err = client.execute(PantryCommand::Take(5)).await.unwrap_err();
//!     assert_eq!(err.downcast::<Shortage>().unwrap().available, 3);
//!     assert_eq!(client.snapshot().await.unwrap().jars, 3);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies (a persistence store, another ledger's client) are passed to
//! [`LedgerActor::run`], not to the constructor, and reach every hook as `&Self::Context`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `LedgerClient` from scripted expectations, so code
//! around a ledger can be tested without the ledger.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod ledger;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use client_trait::LedgerHandle;
pub use error::FrameworkError;
pub use ledger::Ledger;
pub use message::{LedgerRequest, Response};

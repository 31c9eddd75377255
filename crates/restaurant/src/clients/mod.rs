//! # Ledger Clients
//!
//! Typed wrappers around `LedgerClient<L>`. Each implements [`LedgerHandle`] so that framework
//! errors come back as the ledger's own error type, and adds one method per ledger operation.
//!
//! [`LedgerHandle`]: ledger_actor::LedgerHandle

pub mod inventory_client;
pub mod tracker_client;

pub use inventory_client::InventoryClient;
pub use tracker_client::TrackerClient;

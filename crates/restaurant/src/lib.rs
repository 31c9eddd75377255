//! # Restaurant
//!
//! A restaurant order-fulfillment simulation. Orders move through a fixed lifecycle while
//! ingredient stock is consumed and replenished against threshold-based reorder rules.
//!
//! - **[model]**: dishes, the menu catalog and orders
//! - **[tracker]**: the order lifecycle ledger and its actor
//! - **[inventory]**: the stock ledger, reorder rules and its actor
//! - **[storage]**: persisted inventory tables
//! - **[clients]**: typed clients for both ledger actors
//! - **[coordinator]**: turns event records into ledger calls
//! - **[lifecycle]**: start-up and shutdown
//! - **[config]**: TOML configuration

pub mod clients;
pub mod config;
pub mod coordinator;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod storage;
pub mod tracker;

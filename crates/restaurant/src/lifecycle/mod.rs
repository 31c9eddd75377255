//! # System Lifecycle
//!
//! Starts the two ledger actors, wires their clients into the coordinator and shuts
//! everything down again.
//!
//! ## Start-up
//!
//! 1. Load the menu (a missing menu file means an empty menu).
//! 2. Spawn the tracker actor (no context) and the inventory actor (the store as context;
//!    it loads the persisted tables in `on_start`).
//! 3. Initialize the inventory with every ingredient the menu uses.
//! 4. Build the [`Restaurant`](crate::coordinator::Restaurant) around client clones.
//!
//! ## Graceful Shutdown
//!
//! An actor stops when every client of its channel is gone. Drop the `Restaurant` (it
//! holds clones), then call [`KitchenSystem::shutdown`], which drops the remaining clients
//! and awaits both tasks.

pub mod kitchen_system;

pub use kitchen_system::*;

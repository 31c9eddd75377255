//! # Order Lifecycle Tracker
//!
//! Moves orders through `Placed → Accepted → Prepared`, hands prepared orders back to the
//! server, and keeps a record of delivered orders.
//!
//! ## Structure
//!
//! - [`state`] - [`OrderTracker`] and [`Stage`], the synchronous state machine
//! - [`error`] - [`TrackerError`]
//! - [`commands`] - [`TrackerCommand`] and [`TrackerReply`]
//! - [`ledger`] - hosts the tracker in a [`LedgerActor`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant::clients::TrackerClient;
//! use restaurant::model::{OrderSequence, TableId};
//! use restaurant::tracker::{self, OrderTracker, Stage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = tracker::new(OrderTracker::new(), 32);
//!     let client = TrackerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let order = OrderSequence::new().new_order(TableId(4));
//!     let id = order.id();
//!     client.place(order).await?;
//!     client.accept(id).await?;
//!     assert_eq!(client.find(id, Stage::Accepted).await?.table(), TableId(4));
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod error;
pub mod ledger;
pub mod state;

pub use commands::*;
pub use error::*;
pub use state::*;

use ledger_actor::{LedgerActor, LedgerClient};

/// Creates a new tracker actor around `tracker` and its client.
pub fn new(
    tracker: OrderTracker,
    capacity: usize,
) -> (LedgerActor<OrderTracker>, LedgerClient<OrderTracker>) {
    LedgerActor::new(tracker, capacity)
}

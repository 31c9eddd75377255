//! Plain data: dishes, the menu catalog and orders.

pub mod dish;
pub mod menu;
pub mod order;

pub use dish::*;
pub use menu::*;
pub use order::*;

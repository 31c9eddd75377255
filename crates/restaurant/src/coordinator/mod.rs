//! # Fulfillment Coordinator
//!
//! Turns event records into ledger calls. The coordinator resolves the worker, looks the
//! order up in the stage the event expects, then talks to the tracker and the inventory
//! through their clients. The two ledgers never see each other.
//!
//! | Event | Worker | Calls |
//! |---|---|---|
//! | `takeOrder` | server | build order from notes, `place` |
//! | `cookConfirmOrder` | cook | `find(Placed)`, `accept` |
//! | `cookFinishedOrder` | cook | `find(Accepted)`, `consume`, `mark_prepared` |
//! | `tableReceivedOrder` | server | `find(Prepared)`, `retrieve`, `confirm_completed` |
//! | `tableRejectedOrder` | server | `find(Prepared)`, `retrieve` |
//! | `tableRequestedBill` | server | `find(Delivered)` |
//! | `receiveShipment` | anyone | `receive_shipment` |
//!
//! Every applied event is narrated at `info` level.

pub mod error;
pub mod event;
pub mod staff;

pub use error::*;
pub use event::*;
pub use staff::*;

use crate::clients::{InventoryClient, TrackerClient};
use crate::inventory::ReorderRequest;
use crate::model::{Menu, Order, OrderId, OrderSequence};
use crate::storage::codec::parse_shipment;
use crate::tracker::Stage;
use tracing::{error, info, instrument};

/// Outcome of [`Restaurant::replay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub failed: usize,
}

/// The front of house: menu, staff and the two ledger clients.
pub struct Restaurant {
    menu: Menu,
    roster: Roster,
    tracker: TrackerClient,
    inventory: InventoryClient,
    sequence: OrderSequence,
}

impl Restaurant {
    pub fn new(
        menu: Menu,
        roster: Roster,
        tracker: TrackerClient,
        inventory: InventoryClient,
        sequence: OrderSequence,
    ) -> Self {
        Self {
            menu,
            roster,
            tracker,
            inventory,
            sequence,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Applies every non-blank line of `text` in order.
    ///
    /// A record that fails is logged and skipped; the next record is still applied.
    pub async fn replay(&mut self, text: &str) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let result = match Event::parse(line) {
                Ok(event) => self.process(event).await,
                Err(e) => Err(e.into()),
            };
            match result {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!(line = index + 1, order = ?e.order(), error = %e, "Event failed");
                }
            }
        }
        info!(
            applied = summary.applied,
            failed = summary.failed,
            "Replay finished"
        );
        summary
    }

    /// Applies one event.
    #[instrument(skip(self, event), fields(worker = %event.worker, kind = %event.kind))]
    pub async fn process(&mut self, event: Event) -> Result<(), CoordinatorError> {
        match event.kind {
            EventKind::TakeOrder => {
                self.require(&event.worker, Role::Server)?;
                let order = self.build_order(&event.notes)?;
                let (id, table) = (order.id(), order.table());
                let dishes = dish_names(&order);
                self.tracker.place(order).await?;
                info!(
                    "Order {} placed with foods: [{}] by Server {} for table {}",
                    id, dishes, event.worker, table
                );
            }
            EventKind::CookConfirmOrder => {
                self.require(&event.worker, Role::Cook)?;
                let id = order_id(&event)?;
                // a miss reports NotFound in Placed rather than an invalid transition
                self.tracker.find(id, Stage::Placed).await?;
                self.tracker.accept(id).await?;
                info!("Cook {} confirmed order {}", event.worker, id);
            }
            EventKind::CookFinishedOrder => {
                self.require(&event.worker, Role::Cook)?;
                let id = order_id(&event)?;
                let order = self.tracker.find(id, Stage::Accepted).await?;
                // stock is checked before the stage moves; a short kitchen leaves it Accepted
                let issued = self.inventory.consume(order.total_ingredients()?).await?;
                self.tracker.mark_prepared(id).await?;
                info!("Cook {} cooked order {}", event.worker, id);
                narrate_reorders(&issued);
            }
            EventKind::TableReceivedOrder => {
                self.require(&event.worker, Role::Server)?;
                let id = order_id(&event)?;
                // same lookup as cookConfirmOrder, for the NotFound wording
                self.tracker.find(id, Stage::Prepared).await?;
                let order = self.tracker.retrieve(id).await?;
                let table = order.table();
                self.tracker.confirm_completed(order).await?;
                info!(
                    "Server {} gave order {} to table {}",
                    event.worker, id, table
                );
            }
            EventKind::TableRejectedOrder => {
                self.require(&event.worker, Role::Server)?;
                let id = order_id(&event)?;
                // same lookup as cookConfirmOrder, for the NotFound wording
                self.tracker.find(id, Stage::Prepared).await?;
                let order = self.tracker.retrieve(id).await?;
                info!(
                    "Server {} rejected order {} from table {} for reason {}",
                    event.worker,
                    id,
                    order.table(),
                    event.notes
                );
            }
            EventKind::TableRequestedBill => {
                self.require(&event.worker, Role::Server)?;
                let id = order_id(&event)?;
                let order = self.tracker.find(id, Stage::Delivered).await?;
                info!(
                    "Server {} gave bill of {:.2} to table {}",
                    event.worker,
                    order.total_price(),
                    order.table()
                );
            }
            EventKind::ReceiveShipment => {
                let shipment =
                    parse_shipment(&event.notes).map_err(CoordinatorError::MalformedNotes)?;
                let summary = shipment
                    .iter()
                    .map(|(name, quantity)| format!("{name} x {quantity}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let issued = self.inventory.receive_shipment(shipment).await?;
                info!("Received shipment of {} from {}", summary, event.worker);
                narrate_reorders(&issued);
            }
        }
        Ok(())
    }

    fn require(&self, worker: &str, role: Role) -> Result<(), CoordinatorError> {
        if self.roster.has(worker, role) {
            Ok(())
        } else {
            Err(CoordinatorError::UnknownWorker {
                worker: worker.to_string(),
                role,
            })
        }
    }

    /// Builds an order from `takeOrder` notes. An id is only drawn once every dish resolved.
    fn build_order(&mut self, notes: &str) -> Result<Order, CoordinatorError> {
        let notes = OrderNotes::parse(notes).map_err(CoordinatorError::MalformedNotes)?;

        let mut dishes = Vec::new();
        for line in &notes.lines {
            let template = self
                .menu
                .lookup_dish(&line.dish)
                .ok_or_else(|| CoordinatorError::UnknownDish(line.dish.clone()))?;
            for _ in 0..line.copies {
                let mut dish = template.customize();
                for ingredient in &line.additions {
                    dish.add_ingredient(ingredient.as_str(), 1)?;
                }
                for ingredient in &line.removals {
                    dish.remove_ingredient(ingredient, 1);
                }
                dishes.push(dish);
            }
        }

        let mut order = self.sequence.new_order(notes.table);
        for dish in dishes {
            order.add_dish(dish);
        }
        Ok(order)
    }
}

fn order_id(event: &Event) -> Result<OrderId, CoordinatorError> {
    event
        .order
        .ok_or(CoordinatorError::MissingOrderId(event.kind))
}

fn dish_names(order: &Order) -> String {
    order
        .dishes()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn narrate_reorders(issued: &[ReorderRequest]) {
    for request in issued {
        info!("Requested {}", request);
    }
}

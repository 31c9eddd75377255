use crate::model::{merge_ingredients, Dish, IngredientMap, QuantityOverflow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table number an order is served to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out order ids, starting at 1 and never repeating.
///
/// Owned by whoever builds orders (the coordinator) instead of living in a static, so every
/// test can start from a fresh sequence.
#[derive(Debug, Clone)]
pub struct OrderSequence {
    next: u32,
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl OrderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `first`; useful when resuming after earlier orders.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId(self.next);
        self.next += 1;
        id
    }

    /// Returns an empty order carrying the next id.
    pub fn new_order(&mut self, table: TableId) -> Order {
        Order::new(self.next_id(), table)
    }
}

/// A table's order: an ordered list of customized dishes.
///
/// The dish list only grows while the order is being written up; once the order is moved
/// into the tracker nobody holds it mutably any more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    table: TableId,
    dishes: Vec<Dish>,
}

impl Order {
    /// Creates an empty Order.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, normally from an [`OrderSequence`]
    /// * `table` - Table the order is served to
    pub fn new(id: OrderId, table: TableId) -> Self {
        Self {
            id,
            table,
            dishes: Vec::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn add_dish(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    /// Sum of the dish prices.
    pub fn total_price(&self) -> Decimal {
        self.dishes.iter().map(|d| d.price).sum()
    }

    /// Every dish's ingredients merged by name.
    pub fn total_ingredients(&self) -> Result<IngredientMap, QuantityOverflow> {
        let mut total = IngredientMap::new();
        for dish in &self.dishes {
            merge_ingredients(&mut total, &dish.ingredients)?;
        }
        Ok(total)
    }
}

//! Stock accounting with threshold-based reordering.
//!
//! Every ingredient has a stock quantity and a minimum. Whenever an ingredient is found
//! below its minimum it is *flagged* and a [`ReorderRequest`] for [`REORDER_QUANTITY`] units
//! is issued. A flagged ingredient is not requested again until the next shipment arrives,
//! which clears every flag and starts a new shipment cycle.

use crate::inventory::InventoryError;
use crate::model::IngredientMap;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Minimum used for any ingredient without an explicit one.
pub const DEFAULT_MINIMUM: u32 = 10;

/// Units requested per reorder.
pub const REORDER_QUANTITY: u32 = 20;

/// A request to the supplier for more of one ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRequest {
    pub ingredient: String,
    pub quantity: u32,
}

impl ReorderRequest {
    pub fn new(ingredient: impl Into<String>, quantity: u32) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
        }
    }
}

impl Display for ReorderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.ingredient, self.quantity)
    }
}

/// What [`InventoryLedger::initialize`] changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Initialized {
    /// Ingredients that just received the default minimum.
    pub defaulted_minimums: Vec<String>,
    /// Requests issued by the closing sweep.
    pub reorders: Vec<ReorderRequest>,
}

/// The stock, minimum and reorder bookkeeping for every ingredient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryLedger {
    stock: IngredientMap,
    minimums: IngredientMap,
    flagged: BTreeSet<String>,
    requests: Vec<ReorderRequest>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new shipment cycle from persisted tables.
    pub fn from_tables(stock: IngredientMap, minimums: IngredientMap) -> Self {
        Self {
            stock,
            minimums,
            ..Self::default()
        }
    }

    /// Folds persisted tables into the ledger; loaded values win over existing entries.
    pub fn restore(&mut self, stock: IngredientMap, minimums: IngredientMap) {
        self.stock.extend(stock);
        self.minimums.extend(minimums);
    }

    /// Makes sure every name has a stock entry and every stock entry has a minimum, then
    /// sweeps all ingredients.
    pub fn initialize<I, S>(&mut self, names: I) -> Initialized
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.stock.entry(name.into()).or_insert(0);
        }

        let mut defaulted_minimums = Vec::new();
        for name in self.stock.keys() {
            if !self.minimums.contains_key(name) {
                defaulted_minimums.push(name.clone());
            }
        }
        for name in &defaulted_minimums {
            self.minimums.insert(name.clone(), DEFAULT_MINIMUM);
        }

        let reorders = self.sweep_all();
        Initialized {
            defaulted_minimums,
            reorders,
        }
    }

    /// Deducts every quantity in `required`, or nothing at all.
    ///
    /// Returns the reorder requests issued for the consumed ingredients.
    ///
    /// # Errors
    /// [`InventoryError::UnknownIngredient`] or [`InventoryError::InsufficientStock`] for the
    /// first offending ingredient; the ledger is left untouched.
    pub fn consume(&mut self, required: &IngredientMap) -> Result<Vec<ReorderRequest>, InventoryError> {
        for (name, &requested) in required {
            let available = *self
                .stock
                .get(name)
                .ok_or_else(|| InventoryError::UnknownIngredient(name.clone()))?;
            if available < requested {
                return Err(InventoryError::InsufficientStock {
                    ingredient: name.clone(),
                    requested,
                    available,
                });
            }
        }

        for (name, requested) in required {
            if let Some(held) = self.stock.get_mut(name) {
                *held -= requested;
            }
        }
        Ok(self.sweep(required.keys()))
    }

    /// Adds a delivery to stock and starts a new shipment cycle.
    ///
    /// Returns the requests of the new cycle: a shipment can leave some ingredients below
    /// their minimum.
    ///
    /// # Errors
    /// [`InventoryError::StockOverflow`] for the first entry that would not fit. Nothing is
    /// added and the current cycle is kept.
    pub fn receive_shipment(
        &mut self,
        shipment: &IngredientMap,
    ) -> Result<Vec<ReorderRequest>, InventoryError> {
        for (name, &quantity) in shipment {
            self.checked_stock(name, quantity)?;
        }

        for (name, &quantity) in shipment {
            self.add_or_update(name, quantity)?;
        }
        self.flagged.clear();
        self.requests.clear();
        Ok(self.sweep_all())
    }

    /// Adds `delta` units, creating the entry at `delta` if absent. No sweep.
    ///
    /// # Errors
    /// [`InventoryError::StockOverflow`] if the sum does not fit; the entry is unchanged.
    pub fn add_or_update(&mut self, ingredient: &str, delta: u32) -> Result<(), InventoryError> {
        let total = self.checked_stock(ingredient, delta)?;
        self.stock.insert(ingredient.to_string(), total);
        Ok(())
    }

    fn checked_stock(&self, ingredient: &str, delta: u32) -> Result<u32, InventoryError> {
        let held = self.stock(ingredient).unwrap_or(0);
        held.checked_add(delta)
            .ok_or_else(|| InventoryError::StockOverflow {
                ingredient: ingredient.to_string(),
                held,
                added: delta,
            })
    }

    pub fn stock(&self, ingredient: &str) -> Option<u32> {
        self.stock.get(ingredient).copied()
    }

    /// The ingredient's minimum, or [`DEFAULT_MINIMUM`] when none was ever recorded.
    pub fn minimum(&self, ingredient: &str) -> u32 {
        self.minimums
            .get(ingredient)
            .copied()
            .unwrap_or(DEFAULT_MINIMUM)
    }

    /// Whether a reorder for the ingredient is pending in this shipment cycle.
    pub fn is_flagged(&self, ingredient: &str) -> bool {
        self.flagged.contains(ingredient)
    }

    /// Requests issued since the last shipment, in issue order.
    pub fn reorder_requests(&self) -> &[ReorderRequest] {
        &self.requests
    }

    pub fn stock_table(&self) -> &IngredientMap {
        &self.stock
    }

    pub fn minimum_table(&self) -> &IngredientMap {
        &self.minimums
    }

    fn sweep_all(&mut self) -> Vec<ReorderRequest> {
        let names: Vec<String> = self.stock.keys().cloned().collect();
        self.sweep(names.iter())
    }

    fn sweep<'a>(&mut self, names: impl Iterator<Item = &'a String>) -> Vec<ReorderRequest> {
        let mut issued = Vec::new();
        for name in names {
            let Some(&held) = self.stock.get(name) else {
                continue;
            };
            if held < self.minimum(name) && self.flagged.insert(name.clone()) {
                issued.push(ReorderRequest::new(name.clone(), REORDER_QUANTITY));
            }
        }
        self.requests.extend(issued.iter().cloned());
        issued
    }
}

/// The manager's view: one `<name> x <quantity>` line per ingredient.
impl Display for InventoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, quantity) in &self.stock {
            writeln!(f, "{name} x {quantity}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u32)]) -> IngredientMap {
        entries.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    }

    #[test]
    fn test_initialize_fills_missing_entries() {
        let mut ledger = InventoryLedger::from_tables(map(&[("bun", 30)]), map(&[("bun", 5)]));
        let outcome = ledger.initialize(["bun", "patty"]);

        assert_eq!(ledger.stock("patty"), Some(0));
        assert_eq!(ledger.minimum("bun"), 5);
        assert_eq!(ledger.minimum("patty"), DEFAULT_MINIMUM);
        assert_eq!(outcome.defaulted_minimums, vec!["patty".to_string()]);
        assert_eq!(outcome.reorders, vec![ReorderRequest::new("patty", 20)]);
        assert!(ledger.is_flagged("patty"));
        assert!(!ledger.is_flagged("bun"));
    }

    #[test]
    fn test_initialize_gives_stock_only_entries_a_minimum() {
        let mut ledger = InventoryLedger::from_tables(map(&[("salt", 50)]), IngredientMap::new());
        let outcome = ledger.initialize(Vec::<String>::new());
        assert_eq!(outcome.defaulted_minimums, vec!["salt".to_string()]);
        assert_eq!(ledger.minimum_table()["salt"], DEFAULT_MINIMUM);
        assert!(outcome.reorders.is_empty());
    }

    #[test]
    fn test_burger_scenario() {
        let mut ledger = InventoryLedger::from_tables(
            map(&[("bun", 5), ("patty", 5)]),
            map(&[("bun", 3), ("patty", 3)]),
        );
        ledger.initialize(["bun", "patty"]);
        assert!(ledger.reorder_requests().is_empty());

        let burger = map(&[("bun", 1), ("patty", 1)]);
        let mut issued = Vec::new();
        for _ in 0..4 {
            issued.extend(ledger.consume(&burger).unwrap());
        }

        assert_eq!(ledger.stock("bun"), Some(1));
        assert_eq!(ledger.stock("patty"), Some(1));
        assert_eq!(
            issued,
            vec![ReorderRequest::new("bun", 20), ReorderRequest::new("patty", 20)]
        );
        assert_eq!(ledger.reorder_requests(), issued.as_slice());
    }

    #[test]
    fn test_consume_is_all_or_nothing() {
        let mut ledger = InventoryLedger::from_tables(
            map(&[("bun", 5), ("cheese", 1), ("patty", 5)]),
            IngredientMap::new(),
        );
        let before = ledger.clone();

        let err = ledger
            .consume(&map(&[("bun", 1), ("cheese", 2), ("patty", 1)]))
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                ingredient: "cheese".to_string(),
                requested: 2,
                available: 1
            }
        );
        assert_eq!(ledger, before);

        let err = ledger.consume(&map(&[("bun", 1), ("truffle", 1)])).unwrap_err();
        assert_eq!(err, InventoryError::UnknownIngredient("truffle".to_string()));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_consume_to_exactly_zero() {
        let mut ledger = InventoryLedger::from_tables(map(&[("egg", 2)]), map(&[("egg", 0)]));
        assert!(ledger.consume(&map(&[("egg", 2)])).unwrap().is_empty());
        assert_eq!(ledger.stock("egg"), Some(0));
    }

    #[test]
    fn test_consume_only_sweeps_consumed_names() {
        let mut ledger = InventoryLedger::from_tables(
            map(&[("bun", 20), ("salt", 0)]),
            map(&[("bun", 10), ("salt", 10)]),
        );
        let issued = ledger.consume(&map(&[("bun", 1)])).unwrap();
        assert!(issued.is_empty());
        assert!(!ledger.is_flagged("salt"));
    }

    #[test]
    fn test_shipment_starts_a_new_cycle() {
        let mut ledger = InventoryLedger::from_tables(
            map(&[("bun", 2), ("patty", 0)]),
            map(&[("bun", 3), ("patty", 3)]),
        );
        ledger.initialize(["bun", "patty"]);
        assert_eq!(ledger.reorder_requests().len(), 2);

        // a low ingredient is never requested twice in one cycle
        assert!(ledger.consume(&map(&[("bun", 1)])).unwrap().is_empty());

        let issued = ledger
            .receive_shipment(&map(&[("bun", 20), ("lettuce", 4)]))
            .unwrap();
        assert_eq!(ledger.stock("bun"), Some(21));
        assert_eq!(ledger.stock("lettuce"), Some(4));
        // patty is still short and lettuce falls under the default minimum
        assert_eq!(
            issued,
            vec![ReorderRequest::new("lettuce", 20), ReorderRequest::new("patty", 20)]
        );
        assert_eq!(ledger.reorder_requests(), issued.as_slice());
        assert!(!ledger.is_flagged("bun"));
    }

    #[test]
    fn test_add_or_update() {
        let mut ledger = InventoryLedger::new();
        ledger.add_or_update("rice", 7).unwrap();
        ledger.add_or_update("rice", 3).unwrap();
        assert_eq!(ledger.stock("rice"), Some(10));
        assert!(ledger.reorder_requests().is_empty());

        assert_eq!(
            ledger.add_or_update("rice", u32::MAX),
            Err(InventoryError::StockOverflow {
                ingredient: "rice".to_string(),
                held: 10,
                added: u32::MAX
            })
        );
        assert_eq!(ledger.stock("rice"), Some(10));
    }

    #[test]
    fn test_overflowing_shipment_is_rejected_whole() {
        let mut ledger = InventoryLedger::from_tables(
            map(&[("bun", 2), ("flour", 0)]),
            map(&[("bun", 5), ("flour", 5)]),
        );
        ledger.initialize(["bun", "flour"]);
        ledger.add_or_update("flour", u32::MAX).unwrap();

        let err = ledger
            .receive_shipment(&map(&[("bun", 20), ("flour", 50)]))
            .unwrap_err();
        assert!(matches!(err, InventoryError::StockOverflow { ref ingredient, .. } if ingredient == "flour"));
        assert_eq!(ledger.stock("flour"), Some(u32::MAX));
        // bun sorts first but is not delivered either, and the cycle carries on
        assert_eq!(ledger.stock("bun"), Some(2));
        assert!(ledger.is_flagged("bun"));
        assert_eq!(ledger.reorder_requests().len(), 2);
    }

    #[test]
    fn test_report() {
        let ledger = InventoryLedger::from_tables(map(&[("patty", 4), ("bun", 12)]), IngredientMap::new());
        assert_eq!(ledger.to_string(), "bun x 12\npatty x 4\n");
    }
}

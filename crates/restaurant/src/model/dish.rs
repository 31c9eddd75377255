//! A dish as it appears on the menu, or a customized copy of one inside an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Ingredient name → quantity. Ordered so that persisted tables and logs are stable.
pub type IngredientMap = BTreeMap<String, u32>;

/// A summed ingredient quantity no longer fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("quantity of {ingredient} overflows")]
pub struct QuantityOverflow {
    pub ingredient: String,
}

/// A priced recipe.
///
/// Catalog dishes are never mutated; [`Dish::customize`] hands out an owned copy that an
/// order may adjust with [`Dish::add_ingredient`] / [`Dish::remove_ingredient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: Decimal,
    pub ingredients: IngredientMap,
}

impl Dish {
    /// Creates a new Dish.
    ///
    /// # Arguments
    /// * `name` - Menu name, unique within a catalog
    /// * `price` - Unit price
    /// * `ingredients` - Units of each ingredient one portion consumes
    pub fn new(name: impl Into<String>, price: Decimal, ingredients: IngredientMap) -> Self {
        Self {
            name: name.into(),
            price,
            ingredients,
        }
    }

    /// An independent copy to be adjusted for one order.
    pub fn customize(&self) -> Self {
        self.clone()
    }

    /// Adds `quantity` units of `ingredient`, creating the entry if needed.
    ///
    /// # Errors
    /// [`QuantityOverflow`] if the sum does not fit; the dish is left unchanged.
    pub fn add_ingredient(
        &mut self,
        ingredient: impl Into<String>,
        quantity: u32,
    ) -> Result<(), QuantityOverflow> {
        add_quantity(&mut self.ingredients, ingredient.into(), quantity)
    }

    /// Removes up to `quantity` units; the entry disappears once nothing is left.
    /// Removing an ingredient the dish does not use is a no-op.
    pub fn remove_ingredient(&mut self, ingredient: &str, quantity: u32) {
        if let Some(held) = self.ingredients.get_mut(ingredient) {
            if quantity >= *held {
                self.ingredients.remove(ingredient);
            } else {
                *held -= quantity;
            }
        }
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Adds every entry of `other` into `into`, summing quantities by name.
///
/// Stops at the first entry whose sum overflows; earlier entries are already merged.
pub fn merge_ingredients(
    into: &mut IngredientMap,
    other: &IngredientMap,
) -> Result<(), QuantityOverflow> {
    for (name, &quantity) in other {
        add_quantity(into, name.clone(), quantity)?;
    }
    Ok(())
}

/// `map[name] += quantity`, refusing to wrap.
pub fn add_quantity(
    map: &mut IngredientMap,
    name: String,
    quantity: u32,
) -> Result<(), QuantityOverflow> {
    let held = map.get(&name).copied().unwrap_or(0);
    match held.checked_add(quantity) {
        Some(sum) => {
            map.insert(name, sum);
            Ok(())
        }
        None => Err(QuantityOverflow { ingredient: name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Dish {
        Dish::new(
            "Burger",
            Decimal::new(800, 2),
            IngredientMap::from([("bun".to_string(), 1), ("patty".to_string(), 1)]),
        )
    }

    #[test]
    fn test_customize_leaves_template_untouched() {
        let template = burger();
        let mut custom = template.customize();
        custom.add_ingredient("cheese", 1).unwrap();
        custom.add_ingredient("patty", 1).unwrap();

        assert_eq!(custom.ingredients["patty"], 2);
        assert_eq!(custom.ingredients["cheese"], 1);
        assert!(!template.ingredients.contains_key("cheese"));
        assert_eq!(template.ingredients["patty"], 1);
    }

    #[test]
    fn test_remove_ingredient_drops_entry_when_exhausted() {
        let mut dish = burger();
        dish.add_ingredient("pickle", 3).unwrap();

        dish.remove_ingredient("pickle", 1);
        assert_eq!(dish.ingredients["pickle"], 2);

        dish.remove_ingredient("pickle", 5);
        assert!(!dish.ingredients.contains_key("pickle"));

        dish.remove_ingredient("onion", 1);
        assert_eq!(dish.ingredients.len(), 2);
    }

    #[test]
    fn test_merge_ingredients_sums_by_name() {
        let mut total = IngredientMap::from([("bun".to_string(), 2)]);
        merge_ingredients(&mut total, &burger().ingredients).unwrap();
        assert_eq!(total["bun"], 3);
        assert_eq!(total["patty"], 1);
    }

    #[test]
    fn test_add_ingredient_refuses_to_overflow() {
        let mut dish = burger();
        dish.add_ingredient("patty", u32::MAX - 1).unwrap();
        assert_eq!(dish.ingredients["patty"], u32::MAX);

        assert_eq!(
            dish.add_ingredient("patty", 1),
            Err(QuantityOverflow {
                ingredient: "patty".to_string()
            })
        );
        assert_eq!(dish.ingredients["patty"], u32::MAX);
    }

    #[test]
    fn test_merge_ingredients_refuses_to_overflow() {
        let mut total = IngredientMap::from([("bun".to_string(), u32::MAX)]);
        let err = merge_ingredients(&mut total, &burger().ingredients).unwrap_err();
        assert_eq!(err.ingredient, "bun");
        assert_eq!(total["bun"], u32::MAX);
    }
}

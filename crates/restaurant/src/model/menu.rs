//! The menu catalog: dish name → dish template.

use crate::model::Dish;
use crate::storage::codec::parse_recipe;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// A malformed menu line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("menu line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("menu line {line}: dish `{name}` is defined twice")]
    DuplicateDish { line: usize, name: String },
}

/// Immutable lookup of dish templates, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    dishes: BTreeMap<String, Dish>,
}

impl Menu {
    /// Parses one dish per line: `<price> | <name> | <qty>x<ingredient>, ...`.
    pub fn parse(text: &str) -> Result<Self, MenuError> {
        let mut dishes = BTreeMap::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let malformed = |reason: String| MenuError::Malformed {
                line: line_no,
                reason,
            };

            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            let &[price, name, recipe] = fields.as_slice() else {
                return Err(malformed(format!(
                    "expected `<price> | <name> | <recipe>`, got {} field(s)",
                    fields.len()
                )));
            };
            let price = Decimal::from_str(price)
                .map_err(|_| malformed(format!("`{price}` is not a price")))?;
            if price.is_sign_negative() {
                return Err(malformed(format!("negative price `{price}`")));
            }
            if name.is_empty() {
                return Err(malformed("empty dish name".to_string()));
            }
            let ingredients = parse_recipe(recipe).map_err(malformed)?;

            if dishes.contains_key(name) {
                return Err(MenuError::DuplicateDish {
                    line: line_no,
                    name: name.to_string(),
                });
            }
            dishes.insert(name.to_string(), Dish::new(name, price, ingredients));
        }
        Ok(Self { dishes })
    }

    pub fn lookup_dish(&self, name: &str) -> Option<&Dish> {
        self.dishes.get(name)
    }

    /// Every ingredient any dish needs; feeds the inventory's initialization.
    pub fn ingredient_names(&self) -> BTreeSet<String> {
        self.dishes
            .values()
            .flat_map(|d| d.ingredients.keys().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

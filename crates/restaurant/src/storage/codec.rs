//! Line formats shared by the data files.
//!
//! | File | Line |
//! |---|---|
//! | stock, minimums | `<name> \| <integer>` |
//! | reorder requests | `<name> x <integer>` |
//! | menu recipe list | `<qty>x<ingredient>, <qty>x<ingredient>, ...` |
//! | shipment notes | `<ingredient> x <qty>, ...` |
//!
//! Blank lines are skipped everywhere. Errors carry the 1-based line number.

use crate::inventory::ReorderRequest;
use crate::model::{add_quantity, IngredientMap};
use std::fmt::Write;

/// A line that does not match its format.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct CodecError {
    pub line: usize,
    pub reason: String,
}

impl CodecError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parses a stock or minimum table. A repeated name keeps its last value.
pub fn parse_quantity_table(text: &str) -> Result<IngredientMap, CodecError> {
    let mut table = IngredientMap::new();
    for (index, line) in numbered_lines(text) {
        let (name, value) = line
            .split_once('|')
            .ok_or_else(|| CodecError::new(index, "expected `<name> | <integer>`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CodecError::new(index, "empty ingredient name"));
        }
        let value = parse_quantity(value).map_err(|reason| CodecError::new(index, reason))?;
        table.insert(name.to_string(), value);
    }
    Ok(table)
}

pub fn format_quantity_table(table: &IngredientMap) -> String {
    let mut out = String::new();
    for (name, value) in table {
        let _ = writeln!(out, "{name} | {value}");
    }
    out
}

pub fn format_reorder_requests(requests: &[ReorderRequest]) -> String {
    let mut out = String::new();
    for request in requests {
        let _ = writeln!(out, "{request}");
    }
    out
}

/// Parses a menu recipe list such as `1x bun, 2x cheese slice`.
pub fn parse_recipe(list: &str) -> Result<IngredientMap, String> {
    let mut recipe = IngredientMap::new();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let digits = item.len() - item.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        let (quantity, rest) = item.split_at(digits);
        let name = rest
            .trim_start()
            .strip_prefix('x')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| format!("expected `<qty>x<ingredient>`, got `{item}`"))?;
        let quantity = parse_positive(quantity)?;
        add_quantity(&mut recipe, name.to_string(), quantity).map_err(|e| e.to_string())?;
    }
    if recipe.is_empty() {
        return Err("recipe lists no ingredients".to_string());
    }
    Ok(recipe)
}

/// Parses shipment notes such as `flour x 50, bun x 20`.
pub fn parse_shipment(list: &str) -> Result<IngredientMap, String> {
    let mut shipment = IngredientMap::new();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, quantity) = item
            .rsplit_once('x')
            .ok_or_else(|| format!("expected `<ingredient> x <qty>`, got `{item}`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing ingredient name in `{item}`"));
        }
        let quantity = parse_quantity(quantity)?;
        add_quantity(&mut shipment, name.to_string(), quantity).map_err(|e| e.to_string())?;
    }
    Ok(shipment)
}

fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_quantity(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map_err(|_| format!("`{raw}` is not a non-negative integer"))
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    match parse_quantity(raw)? {
        0 => Err("quantity must be positive".to_string()),
        n => Ok(n),
    }
}

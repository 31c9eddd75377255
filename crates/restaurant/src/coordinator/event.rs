//! Event records and the notes they carry.
//!
//! An event is one line: `<workerID> | <eventType> | <orderIdOrBlank> | <optionalNotes>`.

use crate::model::{OrderId, TableId};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A line that is not a well-formed event record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    #[error("expected `<worker> | <event> | <order> | <notes>`, got `{0}`")]
    Malformed(String),

    #[error("empty worker id")]
    MissingWorker,

    #[error("unknown event type `{0}`")]
    UnknownKind(String),

    #[error("`{0}` is not an order number")]
    BadOrderId(String),
}

/// The closed set of things that can happen in the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TakeOrder,
    CookConfirmOrder,
    CookFinishedOrder,
    TableReceivedOrder,
    TableRejectedOrder,
    TableRequestedBill,
    ReceiveShipment,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::TakeOrder => "takeOrder",
            EventKind::CookConfirmOrder => "cookConfirmOrder",
            EventKind::CookFinishedOrder => "cookFinishedOrder",
            EventKind::TableReceivedOrder => "tableReceivedOrder",
            EventKind::TableRejectedOrder => "tableRejectedOrder",
            EventKind::TableRequestedBill => "tableRequestedBill",
            EventKind::ReceiveShipment => "receiveShipment",
        }
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "takeOrder" => Ok(EventKind::TakeOrder),
            "cookConfirmOrder" => Ok(EventKind::CookConfirmOrder),
            "cookFinishedOrder" => Ok(EventKind::CookFinishedOrder),
            "tableReceivedOrder" => Ok(EventKind::TableReceivedOrder),
            "tableRejectedOrder" => Ok(EventKind::TableRejectedOrder),
            "tableRequestedBill" => Ok(EventKind::TableRequestedBill),
            "receiveShipment" => Ok(EventKind::ReceiveShipment),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed event record.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: String,
    pub kind: EventKind,
    pub order: Option<OrderId>,
    pub notes: String,
}

impl Event {
    /// Parses a record. The notes field may be omitted and may itself contain `|`.
    pub fn parse(line: &str) -> Result<Self, EventError> {
        let fields: Vec<&str> = line.splitn(4, '|').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(EventError::Malformed(line.trim().to_string()));
        }
        let worker = fields[0];
        if worker.is_empty() {
            return Err(EventError::MissingWorker);
        }
        let kind = fields[1].parse()?;
        let order = match fields[2] {
            "" => None,
            raw => Some(OrderId(
                raw.parse()
                    .map_err(|_| EventError::BadOrderId(raw.to_string()))?,
            )),
        };
        Ok(Self {
            worker: worker.to_string(),
            kind,
            order,
            notes: fields.get(3).copied().unwrap_or_default().to_string(),
        })
    }
}

/// Most copies of one dish a single order line may ask for.
pub const MAX_COPIES_PER_LINE: u32 = 100;

/// One line item of a `takeOrder`: `n` copies of a dish, each adjusted the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub dish: String,
    pub copies: u32,
    /// One unit added per entry.
    pub additions: Vec<String>,
    /// One unit removed per entry.
    pub removals: Vec<String>,
}

/// Parsed `takeOrder` notes: `<table>; <dish> x<n> [+ingredient] [-ingredient], ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotes {
    pub table: TableId,
    pub lines: Vec<OrderLine>,
}

impl OrderNotes {
    pub fn parse(notes: &str) -> Result<Self, String> {
        let (table, items) = notes
            .split_once(';')
            .ok_or_else(|| format!("expected `<table>; <dish> x<n>, ...`, got `{notes}`"))?;
        let table = table
            .trim()
            .parse()
            .map(TableId)
            .map_err(|_| format!("`{}` is not a table number", table.trim()))?;

        let lines = items
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_order_line)
            .collect::<Result<Vec<_>, _>>()?;
        if lines.is_empty() {
            return Err("order has no dishes".to_string());
        }
        Ok(Self { table, lines })
    }
}

/// `Double Burger x2 +cheese slice -onion` → dish, copies and adjustments.
///
/// The first `x<n>` word ends the dish name. Every word after it that starts with `+` or
/// `-` opens an adjustment; words without a marker extend the adjustment before them.
fn parse_order_line(item: &str) -> Result<OrderLine, String> {
    let words: Vec<&str> = item.split_whitespace().collect();
    let count_at = words
        .iter()
        .position(|w| is_count(w))
        .ok_or_else(|| format!("missing `x<n>` in `{item}`"))?;
    if count_at == 0 {
        return Err(format!("missing dish name in `{item}`"));
    }
    let dish = words[..count_at].join(" ");
    let copies: u32 = words[count_at][1..]
        .parse()
        .map_err(|_| format!("bad count in `{item}`"))?;
    if !(1..=MAX_COPIES_PER_LINE).contains(&copies) {
        return Err(format!(
            "count in `{item}` must be between 1 and {MAX_COPIES_PER_LINE}"
        ));
    }

    let mut additions = Vec::new();
    let mut removals = Vec::new();
    // (is_addition, words)
    let mut current: Option<(bool, Vec<&str>)> = None;
    for &word in &words[count_at + 1..] {
        let marker = match word.chars().next() {
            Some('+') => Some(true),
            Some('-') => Some(false),
            _ => None,
        };
        match marker {
            Some(is_addition) => {
                if let Some(done) = current.take() {
                    push_adjustment(done, &mut additions, &mut removals);
                }
                current = Some((is_addition, vec![&word[1..]]));
            }
            None => match current.as_mut() {
                Some((_, parts)) => parts.push(word),
                None => return Err(format!("unexpected `{word}` in `{item}`")),
            },
        }
    }
    if let Some(done) = current {
        push_adjustment(done, &mut additions, &mut removals);
    }

    Ok(OrderLine {
        dish,
        copies,
        additions,
        removals,
    })
}

fn is_count(word: &str) -> bool {
    word.len() > 1
        && word.starts_with('x')
        && word[1..].chars().all(|c| c.is_ascii_digit())
}

fn push_adjustment(
    (is_addition, parts): (bool, Vec<&str>),
    additions: &mut Vec<String>,
    removals: &mut Vec<String>,
) {
    let name = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        return;
    }
    if is_addition {
        additions.push(name);
    } else {
        removals.push(name);
    }
}

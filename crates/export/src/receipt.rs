use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_catalog::Catalog;
use tally_core::{LedgerResult, ValueObject};
use tally_order::{OrderLedger, line_total};

/// Filler of the separator row between item rows and the total row.
pub const SEPARATOR: &str = "----------";

/// Currency prefix on the grand-total row.
pub const CURRENCY_PREFIX: &str = "P ";

/// One display row of the receipt table: three pre-rendered cells.
///
/// The downstream writer stringifies every cell into a uniform table, so
/// rows carry display strings rather than typed variants. Item rows fill
/// all three cells; the separator and total rows leave the first two blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub quantity: String,
    pub item: String,
    pub price: String,
}

impl Row {
    fn item(quantity: u32, name: &str, line_total: u64) -> Self {
        Self {
            quantity: quantity.to_string(),
            item: name.to_string(),
            price: line_total.to_string(),
        }
    }

    fn separator() -> Self {
        Self {
            quantity: String::new(),
            item: String::new(),
            price: SEPARATOR.to_string(),
        }
    }

    fn total(grand_total: u64) -> Self {
        Self {
            quantity: String::new(),
            item: String::new(),
            price: format!("{CURRENCY_PREFIX}{grand_total}"),
        }
    }
}

impl ValueObject for Row {}

/// Render the order into the writer's table shape.
///
/// Always `current_lines().len() + 2` rows: one per order line in insertion
/// order carrying (quantity, name, line total), then exactly one separator
/// row, then exactly one grand-total row. The writer allocates its table
/// from that count, so the shape holds even for an empty order. Pure:
/// identical inputs yield identical rows.
pub fn format_rows(order: &OrderLedger, catalog: &Catalog) -> LedgerResult<Vec<Row>> {
    let mut rows = Vec::with_capacity(order.len() + 2);
    let mut grand_total = 0u64;
    for line in order.current_lines() {
        let total = line_total(line.quantity, catalog.lookup(&line.item_name)?);
        grand_total += total;
        rows.push(Row::item(line.quantity, &line.item_name, total));
    }
    rows.push(Row::separator());
    rows.push(Row::total(grand_total));
    Ok(rows)
}

/// Everything the external document writer needs for one export.
///
/// The writer owns file naming; it receives the customer name verbatim
/// (empty is allowed) and the export timestamp alongside the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    pub customer_name: String,
    pub rows: Vec<Row>,
    pub exported_at: DateTime<Utc>,
}

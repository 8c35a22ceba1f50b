use serde::{Deserialize, Serialize};

use tally_catalog::Catalog;
use tally_core::{LedgerError, LedgerResult, ValueObject};

/// One order line: item name + how many units have been rung up.
///
/// Quantity is always >= 1 while the line exists; a decrement to zero drops
/// the line from the ledger instead of leaving it at quantity 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_name: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}

impl ValueObject for OrderLine {}

/// Line total for one order line.
pub fn line_total(quantity: u32, unit_price: u64) -> u64 {
    u64::from(quantity) * unit_price
}

/// The running order: insertion-ordered item quantities.
///
/// Lines keep the position of their first `add_one`; increments never move
/// a line. The ledger holds no price data; totals always read the catalog,
/// so a displayed total can never go stale.
///
/// Per-item state machine: Absent → Present(1) → Present(n) → Absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLedger {
    lines: Vec<OrderLine>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring up one unit of `name`.
    ///
    /// A new item is appended at quantity 1; a present item is incremented
    /// in place. Validation happens before any mutation, so a rejected add
    /// leaves the order untouched.
    pub fn add_one(&mut self, catalog: &Catalog, name: &str) -> LedgerResult<()> {
        catalog.lookup(name)?;
        match self.lines.iter_mut().find(|l| l.item_name == name) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLine::new(name, 1)),
        }
        Ok(())
    }

    /// Take one unit of `name` off the order.
    ///
    /// A quantity-1 line is removed entirely and later lines shift up one
    /// position; otherwise the quantity is decremented.
    pub fn remove_one(&mut self, name: &str) -> LedgerResult<()> {
        let index = self
            .position_of(name)
            .ok_or_else(|| LedgerError::not_in_order(name))?;
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        Ok(())
    }

    /// Lines in insertion order, read-only.
    pub fn current_lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Stable positional index of `name`: insertion order minus removed lines.
    ///
    /// This is also the index the UI displays the line at: display order
    /// and ledger order are the same sequence by construction.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.item_name == name)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.item_name == name)
            .map(|l| l.quantity)
    }

    /// Sum of quantity × unit price over current lines.
    ///
    /// Recomputed on every call; the ledger never caches a total. Fails
    /// with `UnknownItem` if a reload dropped an item the order still
    /// references.
    pub fn grand_total(&self, catalog: &Catalog) -> LedgerResult<u64> {
        let mut total = 0u64;
        for line in &self.lines {
            total += line_total(line.quantity, catalog.lookup(&line.item_name)?);
        }
        Ok(total)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

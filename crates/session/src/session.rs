use chrono::Utc;
use tracing::{info, warn};

use tally_catalog::{Catalog, CatalogEntry, SourceRow, parse_rows};
use tally_core::LedgerResult;
use tally_export::{ReceiptDocument, format_rows};
use tally_order::{OrderLedger, OrderLine};

/// One operator session: a catalog and the running order.
///
/// The session owns both exclusively for its lifetime; the UI holds only
/// this facade and re-renders from the query methods after each command.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    order: OrderLedger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // Commands

    /// Replace the catalog from raw source rows.
    ///
    /// The external loader has already skipped the source's header row.
    /// On any malformed row the previous catalog stays in place.
    pub fn load(&mut self, rows: Vec<SourceRow>) -> LedgerResult<()> {
        let entries = match parse_rows(rows) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "catalog load rejected");
                return Err(err);
            }
        };
        self.catalog.load(entries)?;
        info!(items = self.catalog.len(), "catalog loaded");
        Ok(())
    }

    /// Ring up one unit of `name`.
    pub fn add_one(&mut self, name: &str) -> LedgerResult<()> {
        match self.order.add_one(&self.catalog, name) {
            Ok(()) => {
                info!(item = name, quantity = self.order.quantity_of(name), "item added");
                Ok(())
            }
            Err(err) => {
                warn!(item = name, error = %err, "add rejected");
                Err(err)
            }
        }
    }

    /// Take one unit of `name` off the order.
    pub fn remove_one(&mut self, name: &str) -> LedgerResult<()> {
        match self.order.remove_one(name) {
            Ok(()) => {
                info!(item = name, "item removed");
                Ok(())
            }
            Err(err) => {
                warn!(item = name, error = %err, "remove rejected");
                Err(err)
            }
        }
    }

    /// Render the current order for the external document writer.
    ///
    /// The customer name passes through verbatim (empty allowed); the
    /// writer owns file naming from the name and timestamp.
    pub fn export(&self, customer_name: &str) -> LedgerResult<ReceiptDocument> {
        let rows = format_rows(&self.order, &self.catalog)?;
        info!(customer = customer_name, rows = rows.len(), "receipt exported");
        Ok(ReceiptDocument {
            customer_name: customer_name.to_string(),
            rows,
            exported_at: Utc::now(),
        })
    }

    // Queries (side-effect free)

    pub fn catalog_entries(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    pub fn current_lines(&self) -> &[OrderLine] {
        self.order.current_lines()
    }

    pub fn grand_total(&self) -> LedgerResult<u64> {
        self.order.grand_total(&self.catalog)
    }

    /// Positional index of `name` in the displayed order, if present.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.order.position_of(name)
    }

    /// After removing the line at `removed_index`, the index the UI should
    /// re-select: the same position if a line still occupies it.
    pub fn reselect_index(&self, removed_index: usize) -> Option<usize> {
        (removed_index < self.order.len()).then_some(removed_index)
    }
}

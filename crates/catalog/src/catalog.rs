use serde::{Deserialize, Serialize};

use tally_core::{LedgerError, LedgerResult, ValueObject};

/// One purchasable item: unique name + unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Price in whole currency units.
    pub unit_price: u64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

impl ValueObject for CatalogEntry {}

/// One raw catalog source row: two cells, either of which may be blank.
///
/// Shaped like a spreadsheet data row (the loader skips the header row
/// before handing rows over; this crate is agnostic to the source format).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl SourceRow {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
        }
    }
}

/// Parse raw source rows into validated catalog entries.
///
/// Fails on the first blank/missing name cell or missing/non-numeric price
/// cell; the error message carries the 1-based data-row number.
pub fn parse_rows<I>(rows: I) -> LedgerResult<Vec<CatalogEntry>>
where
    I: IntoIterator<Item = SourceRow>,
{
    let mut entries = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        let row_no = i + 1;
        let name = match row.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(LedgerError::load(format!("row {row_no}: item name is missing")));
            }
        };
        let price_cell = row
            .price
            .ok_or_else(|| LedgerError::load(format!("row {row_no}: price is missing")))?;
        let unit_price = price_cell.trim().parse::<u64>().map_err(|_| {
            LedgerError::load(format!("row {row_no}: price {price_cell:?} is not a number"))
        })?;
        entries.push(CatalogEntry { name, unit_price });
    }
    Ok(entries)
}

/// The per-session item catalog.
///
/// Replaced wholesale by every successful `load`, never mutated piecemeal;
/// entry order is source row order. Owned by the session for its lifetime;
/// the UI only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Empty catalog; nothing can be ordered until a load succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the catalog contents.
    ///
    /// Every entry is validated before any state changes: on error the
    /// previous catalog is left exactly as it was. A name appearing twice
    /// in one load keeps its first position and takes the last price.
    pub fn load(&mut self, entries: Vec<CatalogEntry>) -> LedgerResult<()> {
        let mut next: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(LedgerError::load("item name is empty"));
            }
            match next.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => existing.unit_price = entry.unit_price,
                None => next.push(entry),
            }
        }
        self.entries = next;
        Ok(())
    }

    /// Unit price of `name`.
    pub fn lookup(&self, name: &str) -> LedgerResult<u64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.unit_price)
            .ok_or_else(|| LedgerError::unknown_item(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Entries in source row order, read-only.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

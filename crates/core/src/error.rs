//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every
/// failed command leaves catalog and order exactly as they were; none of
/// these are fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Catalog source data was malformed (blank name cell, non-numeric
    /// price cell). The previous catalog stays in place.
    #[error("catalog load failed: {0}")]
    Load(String),

    /// An item was requested that the catalog does not carry.
    #[error("unknown item: {0:?}")]
    UnknownItem(String),

    /// A removal targeted an item with no line in the current order.
    #[error("item not in order: {0:?}")]
    NotInOrder(String),
}

impl LedgerError {
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::UnknownItem(name.into())
    }

    pub fn not_in_order(name: impl Into<String>) -> Self {
        Self::NotInOrder(name.into())
    }
}

//! Export formatting module.
//!
//! Turns the running order into the fixed table shape the external document
//! writer expects, plus the `ReceiptDocument` envelope handed across that
//! boundary. Pure derivation; nothing here mutates catalog or order.

pub mod receipt;

pub use receipt::{CURRENCY_PREFIX, ReceiptDocument, Row, SEPARATOR, format_rows};

//! Catalog domain module.
//!
//! This crate contains business rules for the per-session item catalog,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! The spreadsheet reader is an external collaborator; it hands this crate
//! raw rows, and `parse_rows` turns them into validated entries.

pub mod catalog;

pub use catalog::{Catalog, CatalogEntry, SourceRow, parse_rows};

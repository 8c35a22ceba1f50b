//! Order Ledger domain module.
//!
//! This crate contains business rules for the running order, implemented
//! purely as deterministic domain logic (no IO, no storage). The ledger
//! tracks item names and quantities only; everything priced is derived
//! from the catalog at query time.

pub mod ledger;

pub use ledger::{OrderLedger, OrderLine, line_total};

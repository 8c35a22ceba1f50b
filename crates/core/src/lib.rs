//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod value_object;

pub use error::{LedgerError, LedgerResult};
pub use value_object::ValueObject;

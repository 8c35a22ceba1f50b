//! UI-facing session surface.
//!
//! One `Session` per running app: it owns the catalog and the order ledger
//! and exposes the command/query surface the interactive display calls.
//! Commands are invoked serially (one per user action), so no locking is
//! needed; every command logs through `tracing`.

pub mod session;

pub use session::Session;

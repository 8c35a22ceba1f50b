//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; they have no
/// identity of their own. Everything this workspace trades in (catalog
/// entries, order lines, display rows) is a value object: two order lines
/// for 2× "Pen" are interchangeable.
///
/// Requires `Clone` (values are cheap to copy), `PartialEq` (compared by
/// attributes), and `Debug` (loggable, assertable).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Adapters feeding external data into the payload domain.
//!
//! - [`field_import`]: raw `(field name, value)` pairs applied to a button
//!   through its validated setters

pub mod field_import;

pub use field_import::{ImportReport, apply_fields};

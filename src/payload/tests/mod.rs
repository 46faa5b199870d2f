//! Unit tests for the payload module.
//!
//! Tests are organised by entity, covering setter rules, validity, and the
//! exact wire shape of each payload.

mod import_tests;
mod validation_tests;

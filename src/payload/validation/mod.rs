//! Payload validation implementation.
//!
//! This module provides the platform-limit rules and the composite validator
//! service that runs them alongside each entity's structural rules.

pub mod rules;
pub mod service;

pub use service::DefaultPayloadValidator;

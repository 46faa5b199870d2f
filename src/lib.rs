//! Viber payloads: outbound chat-bot message builders.
//!
//! This crate builds the payloads a bot sends to the Viber messaging
//! platform: interactive keyboards, their buttons, contact cards, and
//! rich-media carousels. Each payload type enforces the platform's field
//! constraints through fail-soft setters and serialises into the exact key
//! layout the remote API expects.
//!
//! Delivering the payload over HTTP is left to the caller.
//!
//! # Modules
//!
//! - [`payload`]: Payload entities, validation, and raw-field import
//!
//! Rejected setter values are reported through [`tracing`] at `debug`
//! level; install a subscriber to see them.

pub mod payload;

//! Outbound chat-bot payloads for the Viber messaging platform.
//!
//! This module implements interactive keyboards, per-button schemas, contact
//! cards, and rich-media carousels, each enforcing the platform's field
//! constraints before flattening into the nested wire structure.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::Button`], [`domain::Keyboard`], [`domain::Contact`], [`domain::RichMedia`])
//! - **Ports**: Trait seams ([`ports::entity::Entity`], [`ports::validator::PayloadValidator`])
//! - **Adapters**: Raw-field import ([`adapters::apply_fields`])
//! - **Validation**: Platform limits applied before transmission
//!
//! Setters are fail-soft: an out-of-constraint value is ignored, the field
//! keeps its previous value, and the setter returns `false`. Serialisation
//! never fails; readiness is a separate check.
//!
//! # Example
//!
//! ```
//! use viber_payloads::payload::domain::{Button, Keyboard};
//! use viber_payloads::payload::ports::entity::Entity;
//! use serde_json::json;
//!
//! let mut button = Button::new();
//! button.set_action_body("Hello");
//! button.set_bg_color("#2db9b9");
//! button.set_text_size("huge"); // ignored
//!
//! let mut keyboard = Keyboard::new();
//! keyboard.set_buttons(vec![button]);
//! keyboard.set_default_height(true);
//!
//! assert!(keyboard.is_valid());
//! let payload = keyboard.to_payload();
//! assert_eq!(payload["Buttons"][0]["BgColor"], json!("#2db9b9"));
//! assert_eq!(payload["Buttons"][0]["TextSize"], json!(null));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;

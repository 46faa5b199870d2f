//! Domain types for outbound payloads.
//!
//! This module contains pure value types with no transport dependencies.
//! Entities are built fresh per outbound message, mutated through fail-soft
//! setters, serialised once, and discarded.

mod button;
mod button_field;
mod color;
mod contact;
mod keyboard;
mod message;
mod raw;
mod rich_media;
mod styles;

pub use button::{
    Button, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_REPLY_BODY_CHARS, MAX_ROWS,
    MAX_TEXT_OPACITY,
};
pub use button_field::{ButtonField, ParseButtonFieldError};
pub use color::HexColor;
pub use contact::{Contact, MAX_CONTACT_NAME_CHARS, MAX_PHONE_NUMBER_CHARS};
pub use keyboard::Keyboard;
pub use message::{Message, MessageHeader, MessageType, Sender};
pub use rich_media::RichMedia;
pub use styles::{
    ActionType, BgMediaType, OpenUrlMediaType, OpenUrlType, TextHAlign, TextSize, TextVAlign,
};

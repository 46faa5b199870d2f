//! Fields shared by every outbound message.
//!
//! The header is transport-level pass-through: its values are copied onto
//! the wire as given and never validated here.

use serde_json::{Map, Value};
use std::fmt;

use super::keyboard::Keyboard;
use crate::payload::ports::entity::Entity;

/// Wire discriminator of a message variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// A contact card.
    Contact,
    /// A rich-media carousel.
    RichMedia,
}

impl MessageType {
    /// Returns the value of the message's `type` key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::RichMedia => "rich_media",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bot identity a message is sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: Option<String>,
}

impl Sender {
    /// Creates a sender without an avatar.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Transport fields carried ahead of a message body.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::{MessageHeader, MessageType, Sender};
/// use serde_json::json;
///
/// let header = MessageHeader::new()
///     .with_receiver("01234567890A=")
///     .with_sender(Sender::new("Bot"));
/// let payload = header.to_payload(MessageType::Contact);
///
/// assert_eq!(payload["type"], json!("contact"));
/// assert_eq!(payload["sender"], json!({"name": "Bot"}));
/// assert!(!payload.contains_key("tracking_data"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageHeader {
    /// Recipient identifier.
    pub receiver: Option<String>,
    /// Bot identity shown to the recipient.
    pub sender: Option<Sender>,
    /// Opaque value echoed back in the recipient's reply.
    pub tracking_data: Option<String>,
    /// Lowest client API version able to render the message.
    pub min_api_version: Option<u32>,
    /// Keyboard shown alongside the message.
    pub keyboard: Option<Keyboard>,
}

impl MessageHeader {
    /// Creates an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recipient.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Sets the sender identity.
    #[must_use]
    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the tracking data.
    #[must_use]
    pub fn with_tracking_data(mut self, tracking_data: impl Into<String>) -> Self {
        self.tracking_data = Some(tracking_data.into());
        self
    }

    /// Sets the minimum client API version.
    #[must_use]
    pub const fn with_min_api_version(mut self, version: u32) -> Self {
        self.min_api_version = Some(version);
        self
    }

    /// Attaches a keyboard.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Builds the header portion of a message payload.
    ///
    /// `type` is always present; every other key appears only when set.
    #[must_use]
    pub fn to_payload(&self, message_type: MessageType) -> Map<String, Value> {
        let mut payload = Map::new();
        if let Some(receiver) = &self.receiver {
            payload.insert("receiver".to_owned(), Value::from(receiver.as_str()));
        }
        payload.insert("type".to_owned(), Value::from(message_type.as_str()));
        if let Some(sender) = &self.sender {
            let mut sender_payload = Map::new();
            sender_payload.insert("name".to_owned(), Value::from(sender.name.as_str()));
            if let Some(avatar) = &sender.avatar {
                sender_payload.insert("avatar".to_owned(), Value::from(avatar.as_str()));
            }
            payload.insert("sender".to_owned(), Value::Object(sender_payload));
        }
        if let Some(tracking_data) = &self.tracking_data {
            payload.insert(
                "tracking_data".to_owned(),
                Value::from(tracking_data.as_str()),
            );
        }
        if let Some(version) = self.min_api_version {
            payload.insert("min_api_version".to_owned(), Value::from(version));
        }
        if let Some(keyboard) = &self.keyboard {
            payload.insert("keyboard".to_owned(), Value::Object(keyboard.to_payload()));
        }
        payload
    }
}

/// A top-level outbound message.
///
/// Implementors put their header keys first and nest their own body under a
/// single variant key.
pub trait Message: Entity {
    /// The variant's wire discriminator.
    fn message_type(&self) -> MessageType;

    /// Transport fields of the message.
    fn header(&self) -> &MessageHeader;

    /// Mutable access to the transport fields.
    fn header_mut(&mut self) -> &mut MessageHeader;
}

//! Contact card message.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::message::{Message, MessageHeader, MessageType};
use super::raw::truncate_chars;
use crate::payload::{error::ValidationError, ports::entity::Entity};

/// Longest contact name kept on set.
pub const MAX_CONTACT_NAME_CHARS: usize = 28;
/// Longest phone number kept on set.
pub const MAX_PHONE_NUMBER_CHARS: usize = 18;

/// A contact card with a name and a phone number.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::Contact;
/// use viber_payloads::payload::ports::entity::Entity;
///
/// let mut contact = Contact::new();
/// contact.set_name("Itamar");
/// contact.set_phone_number("+972511123123");
/// assert!(contact.is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    header: MessageHeader,
    name: Option<String>,
    phone_number: Option<String>,
}

impl Contact {
    /// Creates a contact with an empty header and no details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact carrying `header`.
    #[must_use]
    pub fn with_header(header: MessageHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Sets the name, keeping at most [`MAX_CONTACT_NAME_CHARS`] characters.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(truncate_chars(name, MAX_CONTACT_NAME_CHARS));
    }

    /// Sets the phone number, keeping at most [`MAX_PHONE_NUMBER_CHARS`]
    /// characters.
    pub fn set_phone_number(&mut self, phone_number: &str) {
        self.phone_number = Some(truncate_chars(phone_number, MAX_PHONE_NUMBER_CHARS));
    }

    /// Contact name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Phone number, if set.
    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

impl Entity for Contact {
    fn to_payload(&self) -> Map<String, Value> {
        let mut contact = Map::new();
        contact.insert(
            "name".to_owned(),
            self.name().map_or(Value::Null, Value::from),
        );
        contact.insert(
            "phone_number".to_owned(),
            self.phone_number().map_or(Value::Null, Value::from),
        );

        let mut payload = self.header.to_payload(self.message_type());
        payload.insert("contact".to_owned(), Value::Object(contact));
        payload
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.name().is_none_or(str::is_empty) {
            errors.push(ValidationError::EmptyContactName);
        }
        if self.phone_number().is_none_or(str::is_empty) {
            errors.push(ValidationError::EmptyPhoneNumber);
        }
        ValidationError::collect(errors)
    }
}

impl Message for Contact {
    fn message_type(&self) -> MessageType {
        MessageType::Contact
    }

    fn header(&self) -> &MessageHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut MessageHeader {
        &mut self.header
    }
}

impl Serialize for Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload().serialize(serializer)
    }
}

//! Rich-media carousel message.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::button::{Button, MAX_COLUMNS, MAX_ROWS};
use super::color::HexColor;
use super::message::{Message, MessageHeader, MessageType};
use super::raw::{coerce_in_range, coerce_non_empty_string, coerce_string, settle};
use crate::payload::{error::ValidationError, ports::entity::Entity};

/// A grid of buttons rendered as a scrollable carousel.
///
/// The rich-media options are kept as typed optional fields; each appears on
/// the wire only when set. The `Buttons` entry is rebuilt from the owned
/// buttons on every call to [`Entity::to_payload`].
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::{Button, RichMedia};
/// use viber_payloads::payload::ports::entity::Entity;
///
/// let mut carousel = RichMedia::new();
/// carousel.set_buttons(vec![Button::with_action_body("https://example.com")]);
/// assert!(carousel.set_buttons_group_columns(6));
/// assert!(!carousel.set_buttons_group_rows(0));
///
/// assert!(carousel.is_valid());
/// assert_eq!(carousel.buttons_group_rows(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichMedia {
    header: MessageHeader,
    buttons: Vec<Button>,
    bg_color: Option<HexColor>,
    buttons_group_columns: Option<u8>,
    buttons_group_rows: Option<u8>,
    alt_text: Option<String>,
}

impl RichMedia {
    /// Wire value of the nested `Type` key.
    pub const TYPE: &'static str = "rich_media";

    /// Creates an empty carousel with an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty carousel carrying `header`.
    #[must_use]
    pub fn with_header(header: MessageHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Replaces the whole button sequence; order is kept on the wire.
    pub fn set_buttons(&mut self, buttons: Vec<Button>) {
        self.buttons = buttons;
    }

    /// Sets the carousel background; accepts `#RGB` or `#RRGGBB`.
    pub fn set_bg_color(&mut self, color: impl Into<Value>) -> bool {
        let raw = color.into();
        settle(
            coerce_string("BgColor", &raw)
                .and_then(|text| HexColor::parse("BgColor", &text))
                .map(|parsed| self.bg_color = Some(parsed)),
        )
    }

    /// Sets the group width; accepts integers in `1..=6`.
    pub fn set_buttons_group_columns(&mut self, columns: impl Into<Value>) -> bool {
        let raw = columns.into();
        settle(
            coerce_in_range("ButtonsGroupColumns", &raw, 1, MAX_COLUMNS)
                .map(|parsed| self.buttons_group_columns = Some(parsed)),
        )
    }

    /// Sets the group height; accepts integers in `1..=7`.
    pub fn set_buttons_group_rows(&mut self, rows: impl Into<Value>) -> bool {
        let raw = rows.into();
        settle(
            coerce_in_range("ButtonsGroupRows", &raw, 1, MAX_ROWS)
                .map(|parsed| self.buttons_group_rows = Some(parsed)),
        )
    }

    /// Sets the fallback text for clients that cannot render rich media;
    /// empty values are ignored.
    pub fn set_alt_text(&mut self, alt_text: impl Into<Value>) -> bool {
        let raw = alt_text.into();
        settle(
            coerce_non_empty_string("Alt_text", &raw).map(|parsed| self.alt_text = Some(parsed)),
        )
    }

    /// Buttons in display order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Background colour, if set.
    #[must_use]
    pub const fn bg_color(&self) -> Option<&HexColor> {
        self.bg_color.as_ref()
    }

    /// Group width, if set.
    #[must_use]
    pub const fn buttons_group_columns(&self) -> Option<u8> {
        self.buttons_group_columns
    }

    /// Group height, if set.
    #[must_use]
    pub const fn buttons_group_rows(&self) -> Option<u8> {
        self.buttons_group_rows
    }

    /// Fallback text, if set.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("Type".to_owned(), Value::from(Self::TYPE));
        body.insert(
            "Buttons".to_owned(),
            Value::Array(
                self.buttons
                    .iter()
                    .map(|button| Value::Object(button.to_payload()))
                    .collect(),
            ),
        );
        if let Some(color) = &self.bg_color {
            body.insert("BgColor".to_owned(), Value::from(color.as_str()));
        }
        if let Some(columns) = self.buttons_group_columns {
            body.insert("ButtonsGroupColumns".to_owned(), Value::from(columns));
        }
        if let Some(rows) = self.buttons_group_rows {
            body.insert("ButtonsGroupRows".to_owned(), Value::from(rows));
        }
        if let Some(alt_text) = &self.alt_text {
            body.insert("Alt_text".to_owned(), Value::from(alt_text.as_str()));
        }
        body
    }
}

impl Entity for RichMedia {
    fn to_payload(&self) -> Map<String, Value> {
        let mut payload = self.header.to_payload(self.message_type());
        payload.insert("rich_media".to_owned(), Value::Object(self.body()));
        payload
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if let Some(columns) = self.buttons_group_columns
            && !(1..=MAX_COLUMNS).contains(&columns)
        {
            errors.push(ValidationError::GroupColumnsOutOfRange(columns));
        }
        if let Some(rows) = self.buttons_group_rows
            && !(1..=MAX_ROWS).contains(&rows)
        {
            errors.push(ValidationError::GroupRowsOutOfRange(rows));
        }
        for (index, button) in self.buttons.iter().enumerate() {
            if let Err(error) = button.validate() {
                errors.push(ValidationError::invalid_button(index, error));
            }
        }
        ValidationError::collect(errors)
    }
}

impl Message for RichMedia {
    fn message_type(&self) -> MessageType {
        MessageType::RichMedia
    }

    fn header(&self) -> &MessageHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut MessageHeader {
        &mut self.header
    }
}

impl Serialize for RichMedia {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload().serialize(serializer)
    }
}

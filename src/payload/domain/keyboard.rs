//! Custom keyboard shown in place of the device keyboard.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::button::Button;
use super::color::HexColor;
use super::raw::{coerce_string, settle};
use crate::payload::{error::ValidationError, ports::entity::Entity};

/// An ordered set of buttons plus keyboard-wide display options.
///
/// Unlike [`Button`], unset options are left out of the wire form entirely.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::{Button, Keyboard};
/// use viber_payloads::payload::ports::entity::Entity;
/// use serde_json::json;
///
/// let mut keyboard = Keyboard::new();
/// keyboard.set_buttons(vec![Button::with_action_body("yes")]);
/// keyboard.set_default_height(true);
///
/// assert!(keyboard.is_valid());
/// let payload = keyboard.to_payload();
/// assert_eq!(payload["Type"], json!("keyboard"));
/// assert!(!payload.contains_key("BgColor"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    buttons: Vec<Button>,
    bg_color: Option<HexColor>,
    default_height: Option<bool>,
}

impl Keyboard {
    /// Wire value of the `Type` key.
    pub const TYPE: &'static str = "keyboard";

    /// Creates an empty keyboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole button sequence; order is kept on the wire.
    pub fn set_buttons(&mut self, buttons: Vec<Button>) {
        self.buttons = buttons;
    }

    /// Sets the keyboard background; accepts `#RGB` or `#RRGGBB`.
    pub fn set_bg_color(&mut self, color: impl Into<Value>) -> bool {
        let raw = color.into();
        settle(
            coerce_string("BgColor", &raw)
                .and_then(|text| HexColor::parse("BgColor", &text))
                .map(|parsed| self.bg_color = Some(parsed)),
        )
    }

    /// When `true`, the keyboard always takes the native keyboard's height;
    /// when `false`, short keyboards shrink to fit.
    pub const fn set_default_height(&mut self, default_height: bool) {
        self.default_height = Some(default_height);
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

    /// Default-height flag, if set.
    #[must_use]
    pub const fn default_height(&self) -> Option<bool> {
        self.default_height
    }
}

impl Entity for Keyboard {
    fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("Type".to_owned(), Value::from(Self::TYPE));
        payload.insert(
            "Buttons".to_owned(),
            Value::Array(
                self.buttons
                    .iter()
                    .map(|button| Value::Object(button.to_payload()))
                    .collect(),
            ),
        );
        if let Some(color) = &self.bg_color {
            payload.insert("BgColor".to_owned(), Value::from(color.as_str()));
        }
        if let Some(default_height) = self.default_height {
            payload.insert("DefaultHeight".to_owned(), Value::from(default_height));
        }
        payload
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.default_height.is_none() {
            errors.push(ValidationError::MissingDefaultHeight);
        }
        if self.buttons.is_empty() {
            errors.push(ValidationError::NoButtons);
        }
        ValidationError::collect(errors)
    }
}

impl Serialize for Keyboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload().serialize(serializer)
    }
}

//! Interactive button shared by keyboards and rich-media carousels.
//!
//! Every field has a fail-soft setter: a value that breaks the field's rule
//! is refused, the previous value stays in place, and the setter returns
//! `false`. Callers detect problems through the return flag, the accessors,
//! or [`Entity::validate`].

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::button_field::ButtonField;
use super::color::HexColor;
use super::raw::{
    coerce_bool, coerce_in_range, coerce_non_empty_string, coerce_string, settle, truncate_chars,
};
use super::styles::{
    ActionType, BgMediaType, OpenUrlMediaType, OpenUrlType, TextHAlign, TextSize, TextVAlign,
};
use crate::payload::{error::FieldError, error::ValidationError, ports::entity::Entity};

/// Default width in grid columns.
pub const DEFAULT_COLUMNS: u8 = 6;
/// Default height in grid rows.
pub const DEFAULT_ROWS: u8 = 1;
/// Widest accepted button.
pub const MAX_COLUMNS: u8 = 6;
/// Tallest accepted button.
pub const MAX_ROWS: u8 = 7;
/// Reply bodies longer than this are cut on set; URL bodies are kept whole.
pub const MAX_REPLY_BODY_CHARS: usize = 100;
/// Fully opaque caption.
pub const MAX_TEXT_OPACITY: u8 = 100;

/// A single keyboard or rich-media button.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::Button;
/// use viber_payloads::payload::ports::entity::Entity;
///
/// let mut button = Button::new();
/// assert!(!button.is_valid());
///
/// assert!(button.set_action_body("Hello"));
/// assert!(button.set_columns("3"));
/// assert!(!button.set_rows(9));
///
/// assert_eq!(button.columns(), 3);
/// assert_eq!(button.rows(), 1);
/// assert!(button.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    columns: u8,
    rows: u8,
    bg_color: Option<HexColor>,
    bg_media_type: Option<BgMediaType>,
    bg_media: Option<String>,
    bg_loop: Option<bool>,
    action_type: ActionType,
    action_body: Option<String>,
    image: Option<String>,
    text: Option<String>,
    text_v_align: Option<TextVAlign>,
    text_h_align: Option<TextHAlign>,
    text_opacity: Option<u8>,
    text_size: Option<TextSize>,
    open_url_type: Option<OpenUrlType>,
    open_url_media_type: Option<OpenUrlMediaType>,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            bg_color: None,
            bg_media_type: None,
            bg_media: None,
            bg_loop: None,
            action_type: ActionType::Reply,
            action_body: None,
            image: None,
            text: None,
            text_v_align: None,
            text_h_align: None,
            text_opacity: None,
            text_size: None,
            open_url_type: None,
            open_url_media_type: None,
        }
    }
}

impl Button {
    /// Creates a full-width, single-row reply button with no action body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reply button carrying `body`, truncated like
    /// [`Self::set_action_body`].
    #[must_use]
    pub fn with_action_body(body: &str) -> Self {
        let mut button = Self::new();
        button.set_action_body(body);
        button
    }

    /// Applies a raw value to one field under that field's rule.
    ///
    /// This is the single entry point behind every setter and the raw-field
    /// import boundary.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] describing the refusal; the field is left
    /// unchanged in that case.
    pub fn set_field(&mut self, field: ButtonField, raw: &Value) -> Result<(), FieldError> {
        let name = field.as_str();
        match field {
            ButtonField::Columns => self.columns = coerce_in_range(name, raw, 1, MAX_COLUMNS)?,
            ButtonField::Rows => self.rows = coerce_in_range(name, raw, 1, MAX_ROWS)?,
            ButtonField::BgColor => {
                self.bg_color = Some(HexColor::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::BgMediaType => {
                self.bg_media_type = Some(BgMediaType::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::BgMedia => self.bg_media = Some(coerce_non_empty_string(name, raw)?),
            ButtonField::BgLoop => self.bg_loop = Some(coerce_bool(name, raw)?),
            ButtonField::ActionType => {
                self.action_type = ActionType::parse(name, &coerce_string(name, raw)?)?;
            }
            ButtonField::ActionBody => {
                let body = coerce_string(name, raw)?;
                self.action_body = Some(match self.action_type {
                    ActionType::OpenUrl => body,
                    ActionType::Reply | ActionType::None => {
                        truncate_chars(&body, MAX_REPLY_BODY_CHARS)
                    }
                });
            }
            ButtonField::Image => self.image = Some(coerce_non_empty_string(name, raw)?),
            ButtonField::Text => self.text = Some(coerce_non_empty_string(name, raw)?),
            ButtonField::TextVAlign => {
                self.text_v_align = Some(TextVAlign::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::TextHAlign => {
                self.text_h_align = Some(TextHAlign::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::TextOpacity => {
                self.text_opacity = Some(coerce_in_range(name, raw, 0, MAX_TEXT_OPACITY)?);
            }
            ButtonField::TextSize => {
                self.text_size = Some(TextSize::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::OpenUrlType => {
                self.open_url_type = Some(OpenUrlType::parse(name, &coerce_string(name, raw)?)?);
            }
            ButtonField::OpenUrlMediaType => {
                self.open_url_media_type =
                    Some(OpenUrlMediaType::parse(name, &coerce_string(name, raw)?)?);
            }
        }
        Ok(())
    }

    fn apply(&mut self, field: ButtonField, raw: Value) -> bool {
        settle(self.set_field(field, &raw))
    }

    /// Sets the width; accepts integers (or integer-like text) in `1..=6`.
    pub fn set_columns(&mut self, columns: impl Into<Value>) -> bool {
        self.apply(ButtonField::Columns, columns.into())
    }

    /// Sets the height; accepts integers (or integer-like text) in `1..=7`.
    pub fn set_rows(&mut self, rows: impl Into<Value>) -> bool {
        self.apply(ButtonField::Rows, rows.into())
    }

    /// Sets the background colour; accepts `#RGB` or `#RRGGBB`.
    pub fn set_bg_color(&mut self, color: impl Into<Value>) -> bool {
        self.apply(ButtonField::BgColor, color.into())
    }

    /// Sets the background media kind; accepts `picture` or `gif`.
    pub fn set_bg_media_type(&mut self, media_type: impl Into<Value>) -> bool {
        self.apply(ButtonField::BgMediaType, media_type.into())
    }

    /// Sets the background media URL; empty values are ignored.
    pub fn set_bg_media(&mut self, url: impl Into<Value>) -> bool {
        self.apply(ButtonField::BgMedia, url.into())
    }

    /// Sets whether animated background media loops.
    pub fn set_bg_loop(&mut self, looping: impl Into<Value>) -> bool {
        self.apply(ButtonField::BgLoop, looping.into())
    }

    /// Sets the action; accepts `reply`, `open-url`, `none`, or a legacy alias.
    pub fn set_action_type(&mut self, action_type: impl Into<Value>) -> bool {
        self.apply(ButtonField::ActionType, action_type.into())
    }

    /// Sets the action body.
    ///
    /// With an `open-url` action the value is kept whole; otherwise it is cut
    /// to [`MAX_REPLY_BODY_CHARS`] characters. Set the action type first.
    pub fn set_action_body(&mut self, body: impl Into<Value>) -> bool {
        self.apply(ButtonField::ActionBody, body.into())
    }

    /// Sets the overlay image URL; empty values are ignored.
    pub fn set_image(&mut self, url: impl Into<Value>) -> bool {
        self.apply(ButtonField::Image, url.into())
    }

    /// Sets the caption; empty values are ignored.
    pub fn set_text(&mut self, text: impl Into<Value>) -> bool {
        self.apply(ButtonField::Text, text.into())
    }

    /// Sets vertical alignment; accepts `top`, `middle`, or `bottom`.
    pub fn set_text_v_align(&mut self, align: impl Into<Value>) -> bool {
        self.apply(ButtonField::TextVAlign, align.into())
    }

    /// Sets horizontal alignment; accepts `left`, `center`, or `right`.
    pub fn set_text_h_align(&mut self, align: impl Into<Value>) -> bool {
        self.apply(ButtonField::TextHAlign, align.into())
    }

    /// Sets caption opacity; accepts integers in `0..=100`.
    pub fn set_text_opacity(&mut self, opacity: impl Into<Value>) -> bool {
        self.apply(ButtonField::TextOpacity, opacity.into())
    }

    /// Sets caption size; accepts `small`, `regular`, or `large`.
    pub fn set_text_size(&mut self, size: impl Into<Value>) -> bool {
        self.apply(ButtonField::TextSize, size.into())
    }

    /// Sets where links open; accepts `internal` or `external`.
    pub fn set_open_url_type(&mut self, open_url_type: impl Into<Value>) -> bool {
        self.apply(ButtonField::OpenUrlType, open_url_type.into())
    }

    /// Sets how media links open; accepts `not-media`, `picture`, `video`,
    /// or `gif`.
    pub fn set_open_url_media_type(&mut self, media_type: impl Into<Value>) -> bool {
        self.apply(ButtonField::OpenUrlMediaType, media_type.into())
    }

    /// Width in grid columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Height in grid rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Background colour, if set.
    #[must_use]
    pub const fn bg_color(&self) -> Option<&HexColor> {
        self.bg_color.as_ref()
    }

    /// Background media kind, if set.
    #[must_use]
    pub const fn bg_media_type(&self) -> Option<BgMediaType> {
        self.bg_media_type
    }

    /// Background media URL, if set.
    #[must_use]
    pub fn bg_media(&self) -> Option<&str> {
        self.bg_media.as_deref()
    }

    /// Background loop flag, if set.
    #[must_use]
    pub const fn bg_loop(&self) -> Option<bool> {
        self.bg_loop
    }

    /// Action performed on press.
    #[must_use]
    pub const fn action_type(&self) -> ActionType {
        self.action_type
    }

    /// Action body, if set.
    #[must_use]
    pub fn action_body(&self) -> Option<&str> {
        self.action_body.as_deref()
    }

    /// Overlay image URL, if set.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Caption, if set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Vertical caption alignment, if set.
    #[must_use]
    pub const fn text_v_align(&self) -> Option<TextVAlign> {
        self.text_v_align
    }

    /// Horizontal caption alignment, if set.
    #[must_use]
    pub const fn text_h_align(&self) -> Option<TextHAlign> {
        self.text_h_align
    }

    /// Caption opacity, if set.
    #[must_use]
    pub const fn text_opacity(&self) -> Option<u8> {
        self.text_opacity
    }

    /// Caption size, if set.
    #[must_use]
    pub const fn text_size(&self) -> Option<TextSize> {
        self.text_size
    }

    /// Link target, if set.
    #[must_use]
    pub const fn open_url_type(&self) -> Option<OpenUrlType> {
        self.open_url_type
    }

    /// Media link presentation, if set.
    #[must_use]
    pub const fn open_url_media_type(&self) -> Option<OpenUrlMediaType> {
        self.open_url_media_type
    }

    /// Returns the wire value of one field; unset fields are `null`.
    #[must_use]
    pub fn field_value(&self, field: ButtonField) -> Value {
        fn text_or_null(value: Option<&str>) -> Value {
            value.map_or(Value::Null, Value::from)
        }

        match field {
            ButtonField::Columns => Value::from(self.columns),
            ButtonField::Rows => Value::from(self.rows),
            ButtonField::BgColor => text_or_null(self.bg_color.as_ref().map(HexColor::as_str)),
            ButtonField::BgMediaType => text_or_null(self.bg_media_type.map(|t| t.as_str())),
            ButtonField::BgMedia => text_or_null(self.bg_media()),
            ButtonField::BgLoop => self.bg_loop.map_or(Value::Null, Value::from),
            ButtonField::ActionType => Value::from(self.action_type.as_str()),
            ButtonField::ActionBody => text_or_null(self.action_body()),
            ButtonField::Image => text_or_null(self.image()),
            ButtonField::Text => text_or_null(self.text()),
            ButtonField::TextVAlign => text_or_null(self.text_v_align.map(|a| a.as_str())),
            ButtonField::TextHAlign => text_or_null(self.text_h_align.map(|a| a.as_str())),
            ButtonField::TextOpacity => self.text_opacity.map_or(Value::Null, Value::from),
            ButtonField::TextSize => text_or_null(self.text_size.map(|s| s.as_str())),
            ButtonField::OpenUrlType => text_or_null(self.open_url_type.map(|t| t.as_str())),
            ButtonField::OpenUrlMediaType => {
                text_or_null(self.open_url_media_type.map(|t| t.as_str()))
            }
        }
    }
}

impl Entity for Button {
    /// Every key is always present, in wire order, with `null` for unset
    /// fields.
    fn to_payload(&self) -> Map<String, Value> {
        ButtonField::ALL
            .into_iter()
            .map(|field| (field.as_str().to_owned(), self.field_value(field)))
            .collect()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.action_body.as_deref() {
            Some(body) if !body.is_empty() => Ok(()),
            _ => Err(ValidationError::MissingActionBody),
        }
    }
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_payload().serialize(serializer)
    }
}

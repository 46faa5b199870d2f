//! Wire keys of a keyboard or rich-media button.

use std::fmt;

/// One of the sixteen keys every serialised button carries.
///
/// The declaration order is the wire order, and [`ButtonField::ALL`] lists
/// the keys in that order.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::ButtonField;
///
/// assert_eq!(ButtonField::try_from("OpenURLType"), Ok(ButtonField::OpenUrlType));
/// assert_eq!(ButtonField::OpenUrlType.as_str(), "OpenURLType");
/// assert!(ButtonField::try_from("openurltype").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ButtonField {
    /// Width in grid columns.
    Columns,
    /// Height in grid rows.
    Rows,
    /// Background colour.
    BgColor,
    /// Kind of background media.
    BgMediaType,
    /// Background media URL.
    BgMedia,
    /// Whether animated background media loops.
    BgLoop,
    /// What pressing the button does.
    ActionType,
    /// Reply text or URL sent on press.
    ActionBody,
    /// Overlay image URL.
    Image,
    /// Caption text.
    Text,
    /// Vertical caption alignment.
    TextVAlign,
    /// Horizontal caption alignment.
    TextHAlign,
    /// Caption opacity percentage.
    TextOpacity,
    /// Caption size.
    TextSize,
    /// Where links open.
    OpenUrlType,
    /// How media links are presented.
    OpenUrlMediaType,
}

impl ButtonField {
    /// Every field in wire order.
    pub const ALL: [Self; 16] = [
        Self::Columns,
        Self::Rows,
        Self::BgColor,
        Self::BgMediaType,
        Self::BgMedia,
        Self::BgLoop,
        Self::ActionType,
        Self::ActionBody,
        Self::Image,
        Self::Text,
        Self::TextVAlign,
        Self::TextHAlign,
        Self::TextOpacity,
        Self::TextSize,
        Self::OpenUrlType,
        Self::OpenUrlMediaType,
    ];

    /// Returns the wire key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Columns => "Columns",
            Self::Rows => "Rows",
            Self::BgColor => "BgColor",
            Self::BgMediaType => "BgMediaType",
            Self::BgMedia => "BgMedia",
            Self::BgLoop => "BgLoop",
            Self::ActionType => "ActionType",
            Self::ActionBody => "ActionBody",
            Self::Image => "Image",
            Self::Text => "Text",
            Self::TextVAlign => "TextVAlign",
            Self::TextHAlign => "TextHAlign",
            Self::TextOpacity => "TextOpacity",
            Self::TextSize => "TextSize",
            Self::OpenUrlType => "OpenURLType",
            Self::OpenUrlMediaType => "OpenURLMediaType",
        }
    }
}

impl fmt::Display for ButtonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a key is not one of the button wire keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseButtonFieldError(String);

impl fmt::Display for ParseButtonFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown button field: '{}'", self.0)
    }
}

impl std::error::Error for ParseButtonFieldError {}

impl TryFrom<&str> for ButtonField {
    type Error = ParseButtonFieldError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseButtonFieldError(s.to_owned()))
    }
}

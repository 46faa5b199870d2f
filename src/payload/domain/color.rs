//! Background colour values.

use std::fmt;

use crate::payload::error::FieldError;

/// A `#RGB` or `#RRGGBB` colour, stored exactly as supplied.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::HexColor;
///
/// assert!(HexColor::parse("BgColor", "#2db9b9").is_ok());
/// assert!(HexColor::parse("BgColor", "#fff").is_ok());
/// assert!(HexColor::parse("BgColor", "2db9b9").is_err());
/// assert!(HexColor::parse("BgColor", "#abcd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a colour for the named field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidHexColor`] unless the whole value is `#`
    /// followed by exactly three or six hexadecimal digits.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, FieldError> {
        let digits = value.strip_prefix('#').filter(|digits| {
            matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        });
        match digits {
            Some(_) => Ok(Self(value.to_owned())),
            None => Err(FieldError::InvalidHexColor {
                field,
                value: value.to_owned(),
            }),
        }
    }

    /// Returns the colour as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

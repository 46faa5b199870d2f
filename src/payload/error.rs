//! Error types for payload mutation and validation.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Note that
//! none of these errors escape a setter: mutations are fail-soft and only
//! report success as a boolean. The errors surface through
//! [`Entity::validate`](super::ports::entity::Entity::validate), the import
//! report, and structured logs.

use thiserror::Error;

/// Reasons a raw value was refused by a validated setter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The value could not be coerced to an integer.
    #[error("{field}: value {raw} is not an integer")]
    NotAnInteger {
        /// Wire name of the field.
        field: &'static str,
        /// The offending raw value, rendered as JSON.
        raw: String,
    },

    /// The coerced integer lies outside the accepted range.
    #[error("{field}: {actual} is outside the range {min}..={max}")]
    OutOfRange {
        /// Wire name of the field.
        field: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// The coerced value.
        actual: i64,
    },

    /// The value could not be coerced to a boolean.
    #[error("{field}: value {raw} is not a boolean")]
    NotABoolean {
        /// Wire name of the field.
        field: &'static str,
        /// The offending raw value, rendered as JSON.
        raw: String,
    },

    /// The value is not a string.
    #[error("{field}: value {raw} is not a string")]
    NotAString {
        /// Wire name of the field.
        field: &'static str,
        /// The offending raw value, rendered as JSON.
        raw: String,
    },

    /// The value is not a member of the field's allow-list.
    #[error("{field}: '{value}' is not one of {}", allowed.join(", "))]
    NotAllowed {
        /// Wire name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values.
        allowed: &'static [&'static str],
    },

    /// The value is not a `#RGB` or `#RRGGBB` colour.
    #[error("{field}: '{value}' is not a hex colour")]
    InvalidHexColor {
        /// Wire name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An empty value was supplied for a field that ignores empties.
    #[error("{field}: value is empty")]
    Empty {
        /// Wire name of the field.
        field: &'static str,
    },
}

impl FieldError {
    /// Returns the wire name of the field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotABoolean { field, .. }
            | Self::NotAString { field, .. }
            | Self::NotAllowed { field, .. }
            | Self::InvalidHexColor { field, .. }
            | Self::Empty { field } => field,
        }
    }
}

/// Reasons an entity is not ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A button has no action body.
    #[error("button action body is required")]
    MissingActionBody,

    /// A keyboard contains no buttons.
    #[error("keyboard must contain at least one button")]
    NoButtons,

    /// A keyboard has no explicit default-height flag.
    #[error("keyboard default height must be set")]
    MissingDefaultHeight,

    /// Rich-media group columns lie outside 1..=6.
    #[error("buttons group columns {0} is outside the range 1..=6")]
    GroupColumnsOutOfRange(u8),

    /// Rich-media group rows lie outside 1..=7.
    #[error("buttons group rows {0} is outside the range 1..=7")]
    GroupRowsOutOfRange(u8),

    /// A contact has no name.
    #[error("contact name is required")]
    EmptyContactName,

    /// A contact has no phone number.
    #[error("contact phone number is required")]
    EmptyPhoneNumber,

    /// Button text exceeds the configured platform limit.
    #[error("button text has {actual} characters, exceeds limit of {max}")]
    TextTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// Button action body exceeds the configured platform limit.
    #[error("button action body has {actual} characters, exceeds limit of {max}")]
    ActionBodyTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// A contained button failed validation.
    #[error("invalid button at index {index}: {source}")]
    InvalidButton {
        /// Position of the button in its container.
        index: usize,
        /// The button's own failure.
        source: Box<Self>,
    },

    /// The keyboard attached to a message failed validation.
    #[error("invalid attached keyboard: {source}")]
    InvalidKeyboard {
        /// The keyboard's own failure.
        source: Box<Self>,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Wraps a button failure with the button's position.
    #[must_use]
    pub fn invalid_button(index: usize, source: Self) -> Self {
        Self::InvalidButton {
            index,
            source: Box::new(source),
        }
    }

    /// Wraps a failure of the keyboard attached to a message.
    #[must_use]
    pub fn invalid_keyboard(source: Self) -> Self {
        Self::InvalidKeyboard {
            source: Box::new(source),
        }
    }

    /// Turns collected errors into a validation result.
    ///
    /// An empty vector means success; a single error is returned unwrapped.
    ///
    /// # Errors
    ///
    /// Returns the sole error, or [`ValidationError::Multiple`] when more
    /// than one was collected.
    pub fn collect(mut errors: Vec<Self>) -> Result<(), Self> {
        match errors.len() {
            0 => Ok(()),
            1 => errors.pop().map_or(Ok(()), Err),
            _ => Err(Self::Multiple(errors)),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

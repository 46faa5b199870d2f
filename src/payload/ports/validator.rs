//! Validator port for pre-send payload checks.
//!
//! [`Entity::is_valid`](super::entity::Entity::is_valid) answers the
//! structural question each entity owns. A validator adds the limits the
//! remote platform documents but the setters do not enforce.

use crate::payload::{
    domain::{Contact, Keyboard, RichMedia},
    error::ValidationError,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for payload validation before transmission.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Run the entity's own structural rules first
/// - Collect all validation errors before returning (not fail-fast)
/// - Be stateless and thread-safe
pub trait PayloadValidator: Send + Sync {
    /// Validates a standalone keyboard.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails.
    fn validate_keyboard(&self, keyboard: &Keyboard) -> ValidationResult<()>;

    /// Validates a contact message, including any attached keyboard.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails.
    fn validate_contact(&self, contact: &Contact) -> ValidationResult<()>;

    /// Validates a rich-media message, including any attached keyboard.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails.
    fn validate_rich_media(&self, rich_media: &RichMedia) -> ValidationResult<()>;
}

/// Platform limits applied on top of the structural rules.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_action_body_length, 250);
///
/// let ios = ValidationConfig::ios();
/// assert_eq!(ios.max_action_body_length, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum button caption length in characters.
    pub max_text_length: usize,
    /// Maximum action body length in characters.
    ///
    /// Reply bodies are already cut to 100 characters on set, so in practice
    /// this bounds `open-url` bodies.
    pub max_action_body_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_length: 250,
            max_action_body_length: 250, // Android client limit
        }
    }
}

impl ValidationConfig {
    /// Limits of the iOS client, the strictest supported platform.
    #[must_use]
    pub const fn ios() -> Self {
        Self {
            max_text_length: 250,
            max_action_body_length: 100,
        }
    }

    /// Disables the platform limits, leaving only structural rules.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_text_length: usize::MAX,
            max_action_body_length: usize::MAX,
        }
    }
}

//! Validation service implementation.
//!
//! Provides the default implementation of the `PayloadValidator` port,
//! combining each entity's structural rules with the platform-limit rules.

use crate::payload::{
    domain::{Contact, Keyboard, Message, RichMedia},
    error::ValidationError,
    ports::{
        entity::Entity,
        validator::{PayloadValidator, ValidationConfig, ValidationResult},
    },
    validation::rules::{self, collect_errors},
};

/// Default implementation of the payload validator.
///
/// Applies all rules in order, collecting errors to provide comprehensive
/// feedback rather than failing on the first error. It is stricter than
/// [`Entity::is_valid`]: keyboard buttons must carry an action body, and
/// attached keyboards are checked along with the message.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::domain::{Button, Keyboard};
/// use viber_payloads::payload::ports::validator::PayloadValidator;
/// use viber_payloads::payload::validation::service::DefaultPayloadValidator;
///
/// let mut keyboard = Keyboard::new();
/// keyboard.set_buttons(vec![Button::with_action_body("menu")]);
/// keyboard.set_default_height(false);
///
/// let validator = DefaultPayloadValidator::new();
/// assert!(validator.validate_keyboard(&keyboard).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultPayloadValidator {
    config: ValidationConfig,
}

impl DefaultPayloadValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for DefaultPayloadValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadValidator for DefaultPayloadValidator {
    fn validate_keyboard(&self, keyboard: &Keyboard) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = keyboard.validate() {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = rules::validate_each_button(keyboard.buttons(), |button| {
            rules::validate_button(button, &self.config)
        }) {
            collect_errors(&mut errors, e);
        }

        ValidationError::collect(errors)
    }

    fn validate_contact(&self, contact: &Contact) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = contact.validate() {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = rules::validate_attached_keyboard(contact.header(), &self.config) {
            errors.push(e);
        }

        ValidationError::collect(errors)
    }

    fn validate_rich_media(&self, rich_media: &RichMedia) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rich_media.validate() {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = rules::validate_each_button(rich_media.buttons(), |button| {
            rules::validate_button_limits(button, &self.config)
        }) {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = rules::validate_attached_keyboard(rich_media.header(), &self.config) {
            errors.push(e);
        }

        ValidationError::collect(errors)
    }
}

//! Individual validation rule implementations.
//!
//! Each rule is a pure function over a domain value. Rules return `Ok(())`
//! on success or a specific `ValidationError` on failure.

use crate::payload::{
    domain::{Button, MessageHeader},
    error::ValidationError,
    ports::{entity::Entity, validator::ValidationConfig},
};

/// Validates a button's caption and action body against platform limits.
///
/// # Errors
///
/// Returns `ValidationError::TextTooLong` and/or
/// `ValidationError::ActionBodyTooLong`, combined when both apply.
pub fn validate_button_limits(
    button: &Button,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    let text_length = button.text().map_or(0, |text| text.chars().count());
    if text_length > config.max_text_length {
        errors.push(ValidationError::TextTooLong {
            max: config.max_text_length,
            actual: text_length,
        });
    }

    let body_length = button.action_body().map_or(0, |body| body.chars().count());
    if body_length > config.max_action_body_length {
        errors.push(ValidationError::ActionBodyTooLong {
            max: config.max_action_body_length,
            actual: body_length,
        });
    }

    ValidationError::collect(errors)
}

/// Validates a button's structure and platform limits together.
///
/// # Errors
///
/// Returns every failure from [`Entity::validate`] and
/// [`validate_button_limits`].
pub fn validate_button(button: &Button, config: &ValidationConfig) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if let Err(e) = button.validate() {
        collect_errors(&mut errors, e);
    }
    if let Err(e) = validate_button_limits(button, config) {
        collect_errors(&mut errors, e);
    }
    ValidationError::collect(errors)
}

/// Runs `rule` on each button, tagging failures with the button's index.
///
/// # Errors
///
/// Returns one `ValidationError::InvalidButton` per failing button,
/// combined when more than one fails.
pub fn validate_each_button<F>(buttons: &[Button], rule: F) -> Result<(), ValidationError>
where
    F: Fn(&Button) -> Result<(), ValidationError>,
{
    let errors = buttons
        .iter()
        .enumerate()
        .filter_map(|(index, button)| {
            rule(button)
                .err()
                .map(|e| ValidationError::invalid_button(index, e))
        })
        .collect();
    ValidationError::collect(errors)
}

/// Validates the keyboard attached to a message header, if any.
///
/// # Errors
///
/// Returns `ValidationError::InvalidKeyboard` wrapping the keyboard's own
/// structural failures and those of its buttons.
pub fn validate_attached_keyboard(
    header: &MessageHeader,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let Some(keyboard) = header.keyboard.as_ref() else {
        return Ok(());
    };

    let mut errors = Vec::new();
    if let Err(e) = keyboard.validate() {
        collect_errors(&mut errors, e);
    }
    if let Err(e) = validate_each_button(keyboard.buttons(), |b| validate_button(b, config)) {
        collect_errors(&mut errors, e);
    }
    ValidationError::collect(errors).map_err(ValidationError::invalid_keyboard)
}

/// Appends `error` to `errors`, flattening `Multiple` variants.
pub(crate) fn collect_errors(errors: &mut Vec<ValidationError>, error: ValidationError) {
    match error {
        ValidationError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}

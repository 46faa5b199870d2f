//! Unit tests for the validation service and platform-limit rules.

use crate::payload::{
    domain::{Button, Contact, Keyboard, MessageHeader, RichMedia},
    error::ValidationError,
    ports::validator::{PayloadValidator, ValidationConfig},
    validation::{rules, service::DefaultPayloadValidator},
};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn default_validator() -> DefaultPayloadValidator {
    DefaultPayloadValidator::new()
}

#[fixture]
fn lenient_validator() -> DefaultPayloadValidator {
    DefaultPayloadValidator::with_config(ValidationConfig::lenient())
}

#[fixture]
fn ios_validator() -> DefaultPayloadValidator {
    DefaultPayloadValidator::with_config(ValidationConfig::ios())
}

fn url_button(length: usize) -> Button {
    let mut button = Button::new();
    button.set_action_type("open-url");
    button.set_action_body(format!("https://example.com/{}", "p".repeat(length - 20)));
    button
}

fn ready_keyboard(buttons: Vec<Button>) -> Keyboard {
    let mut keyboard = Keyboard::new();
    keyboard.set_buttons(buttons);
    keyboard.set_default_height(true);
    keyboard
}

// ============================================================================
// Rules
// ============================================================================

#[rstest]
fn text_within_limit_passes() {
    let mut button = Button::with_action_body("ok");
    button.set_text("a".repeat(250));
    assert!(rules::validate_button_limits(&button, &ValidationConfig::default()).is_ok());
}

#[rstest]
fn text_over_limit_fails() {
    let mut button = Button::with_action_body("ok");
    button.set_text("a".repeat(251));
    assert_eq!(
        rules::validate_button_limits(&button, &ValidationConfig::default()),
        Err(ValidationError::TextTooLong {
            max: 250,
            actual: 251
        })
    );
}

#[rstest]
#[case(ValidationConfig::default(), true)]
#[case(ValidationConfig::ios(), false)]
#[case(ValidationConfig::lenient(), true)]
fn url_body_limit_depends_on_config(#[case] config: ValidationConfig, #[case] passes: bool) {
    let button = url_button(180);
    assert_eq!(
        rules::validate_button_limits(&button, &config).is_ok(),
        passes
    );
}

#[rstest]
fn validate_button_combines_structure_and_limits() {
    let mut button = Button::new();
    button.set_text("a".repeat(300));

    let error = rules::validate_button(&button, &ValidationConfig::default())
        .expect_err("missing body and long text");
    assert_eq!(
        error.errors(),
        Some(
            [
                ValidationError::MissingActionBody,
                ValidationError::TextTooLong {
                    max: 250,
                    actual: 300
                },
            ]
            .as_slice()
        )
    );
}

#[rstest]
fn validate_each_button_tags_indices() {
    let buttons = vec![
        Button::with_action_body("a"),
        Button::new(),
        Button::new(),
    ];
    let error = rules::validate_each_button(&buttons, |b| {
        rules::validate_button(b, &ValidationConfig::default())
    })
    .expect_err("two buttons lack bodies");

    assert_eq!(
        error,
        ValidationError::Multiple(vec![
            ValidationError::invalid_button(1, ValidationError::MissingActionBody),
            ValidationError::invalid_button(2, ValidationError::MissingActionBody),
        ])
    );
}

#[rstest]
fn header_without_keyboard_passes() {
    assert!(
        rules::validate_attached_keyboard(&MessageHeader::new(), &ValidationConfig::default())
            .is_ok()
    );
}

// ============================================================================
// Service
// ============================================================================

#[rstest]
fn ready_keyboard_passes(default_validator: DefaultPayloadValidator) {
    let keyboard = ready_keyboard(vec![Button::with_action_body("go")]);
    assert!(default_validator.validate_keyboard(&keyboard).is_ok());
}

#[rstest]
fn keyboard_service_requires_button_bodies(default_validator: DefaultPayloadValidator) {
    let keyboard = ready_keyboard(vec![Button::new()]);
    assert_eq!(
        default_validator.validate_keyboard(&keyboard),
        Err(ValidationError::invalid_button(
            0,
            ValidationError::MissingActionBody
        ))
    );
}

#[rstest]
fn keyboard_service_flattens_structural_errors(default_validator: DefaultPayloadValidator) {
    let error = default_validator
        .validate_keyboard(&Keyboard::new())
        .expect_err("empty keyboard");
    assert_eq!(
        error.errors().map(<[ValidationError]>::len),
        Some(2),
        "structural errors should be flattened, not nested"
    );
}

#[rstest]
fn contact_with_broken_keyboard_fails(default_validator: DefaultPayloadValidator) {
    let mut contact =
        Contact::with_header(MessageHeader::new().with_keyboard(Keyboard::new()));
    contact.set_name("Itamar");
    contact.set_phone_number("+972511123123");

    let error = default_validator
        .validate_contact(&contact)
        .expect_err("attached keyboard is empty");
    assert!(matches!(error, ValidationError::InvalidKeyboard { .. }));
}

#[rstest]
fn contact_without_keyboard_passes(default_validator: DefaultPayloadValidator) {
    let mut contact = Contact::new();
    contact.set_name("Itamar");
    contact.set_phone_number("+972511123123");
    assert!(default_validator.validate_contact(&contact).is_ok());
}

#[rstest]
fn rich_media_url_limits_follow_platform(
    default_validator: DefaultPayloadValidator,
    ios_validator: DefaultPayloadValidator,
    lenient_validator: DefaultPayloadValidator,
) {
    let mut carousel = RichMedia::new();
    carousel.set_buttons(vec![url_button(120)]);

    assert!(default_validator.validate_rich_media(&carousel).is_ok());
    assert!(lenient_validator.validate_rich_media(&carousel).is_ok());
    assert_eq!(
        ios_validator.validate_rich_media(&carousel),
        Err(ValidationError::invalid_button(
            0,
            ValidationError::ActionBodyTooLong {
                max: 100,
                actual: 120
            }
        ))
    );
}

#[rstest]
fn rich_media_service_keeps_structural_rules(lenient_validator: DefaultPayloadValidator) {
    let mut carousel = RichMedia::new();
    carousel.set_buttons(vec![Button::new()]);
    assert!(lenient_validator.validate_rich_media(&carousel).is_err());
}

#[rstest]
fn error_messages_are_descriptive() {
    let error = ValidationError::invalid_button(3, ValidationError::MissingActionBody);
    assert_eq!(
        error.to_string(),
        "invalid button at index 3: button action body is required"
    );

    let combined = ValidationError::Multiple(vec![
        ValidationError::NoButtons,
        ValidationError::MissingDefaultHeight,
    ]);
    assert_eq!(
        combined.to_string(),
        "multiple validation errors: keyboard must contain at least one button; \
         keyboard default height must be set"
    );
}

#[rstest]
fn collect_unwraps_single_errors() {
    assert_eq!(ValidationError::collect(Vec::new()), Ok(()));
    assert_eq!(
        ValidationError::collect(vec![ValidationError::NoButtons]),
        Err(ValidationError::NoButtons)
    );
}

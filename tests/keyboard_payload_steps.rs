//! BDD steps for keyboard payload building.
//!
//! Covers fail-soft option setters and readiness checks using rstest-bdd.

use eyre::eyre;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Map, Value};
use viber_payloads::payload::{
    domain::{Button, Keyboard},
    ports::entity::Entity,
};

/// World state for keyboard BDD tests.
#[derive(Default)]
struct KeyboardWorld {
    keyboard: Keyboard,
    last_set_accepted: Option<bool>,
    payload: Option<Map<String, Value>>,
}

impl KeyboardWorld {
    fn payload(&self) -> Result<&Map<String, Value>, eyre::Report> {
        self.payload
            .as_ref()
            .ok_or_else(|| eyre!("keyboard was not serialised"))
    }
}

#[fixture]
fn world() -> KeyboardWorld {
    KeyboardWorld::default()
}

// ============================================================================
// Given Steps
// ============================================================================

#[given(r"a keyboard with {count:usize} reply buttons")]
fn keyboard_with_buttons(world: &mut KeyboardWorld, count: usize) {
    let buttons = (0..count)
        .map(|index| Button::with_action_body(&format!("option-{index}")))
        .collect();
    world.keyboard.set_buttons(buttons);
}

#[given("the keyboard default height is enabled")]
fn default_height_enabled(world: &mut KeyboardWorld) {
    world.keyboard.set_default_height(true);
}

// ============================================================================
// When Steps
// ============================================================================

#[when(r#"the keyboard background is set to "{color}""#)]
fn set_background(world: &mut KeyboardWorld, color: String) {
    world.last_set_accepted = Some(world.keyboard.set_bg_color(color));
}

#[when("the keyboard is serialised")]
fn serialise_keyboard(world: &mut KeyboardWorld) {
    world.payload = Some(world.keyboard.to_payload());
}

// ============================================================================
// Then Steps
// ============================================================================

#[then(r#"the payload type is "{expected}""#)]
fn payload_type(world: &KeyboardWorld, expected: String) -> Result<(), eyre::Report> {
    let actual = world.payload()?.get("Type").and_then(Value::as_str);
    if actual != Some(expected.as_str()) {
        return Err(eyre!("expected type {expected}, got {actual:?}"));
    }
    Ok(())
}

#[then(r"the payload lists {count:usize} buttons in order")]
fn payload_lists_buttons(world: &KeyboardWorld, count: usize) -> Result<(), eyre::Report> {
    let buttons = world
        .payload()?
        .get("Buttons")
        .and_then(Value::as_array)
        .ok_or_else(|| eyre!("payload has no Buttons array"))?;

    if buttons.len() != count {
        return Err(eyre!("expected {count} buttons, got {}", buttons.len()));
    }

    for (index, button) in buttons.iter().enumerate() {
        let expected = format!("option-{index}");
        if button.get("ActionBody").and_then(Value::as_str) != Some(expected.as_str()) {
            return Err(eyre!("button {index} is out of order"));
        }
    }
    Ok(())
}

#[then(r#"the payload has no "{key}" key"#)]
fn payload_lacks_key(world: &KeyboardWorld, key: String) -> Result<(), eyre::Report> {
    if world.payload()?.contains_key(&key) {
        return Err(eyre!("payload unexpectedly contains {key}"));
    }
    Ok(())
}

#[then("the colour change was refused")]
fn colour_refused(world: &KeyboardWorld) -> Result<(), eyre::Report> {
    match world.last_set_accepted {
        Some(false) => Ok(()),
        other => Err(eyre!("expected refusal, got {other:?}")),
    }
}

#[then("the keyboard is valid")]
fn keyboard_valid(world: &KeyboardWorld) -> Result<(), eyre::Report> {
    world
        .keyboard
        .validate()
        .map_err(|err| eyre!("keyboard should be valid: {err}"))
}

#[then("the keyboard is invalid")]
fn keyboard_invalid(world: &KeyboardWorld) -> Result<(), eyre::Report> {
    if world.keyboard.is_valid() {
        return Err(eyre!("keyboard should be invalid"));
    }
    Ok(())
}

// ============================================================================
// Scenario Definitions
// ============================================================================

#[scenario(
    path = "tests/features/keyboard_payload.feature",
    name = "Keyboard with reply buttons is ready to send"
)]
fn keyboard_ready_to_send(world: KeyboardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/keyboard_payload.feature",
    name = "Invalid keyboard colour is ignored"
)]
fn invalid_colour_ignored(world: KeyboardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/keyboard_payload.feature",
    name = "Keyboard without buttons is not ready"
)]
fn keyboard_without_buttons(world: KeyboardWorld) {
    let _ = world;
}

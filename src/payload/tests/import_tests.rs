//! Unit tests for the raw-field import boundary.

use crate::payload::{
    adapters::{ImportReport, apply_fields},
    domain::{ActionType, Button, TextSize},
    error::FieldError,
    ports::entity::Entity,
};
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::BTreeMap;

#[rstest]
fn clean_import_applies_every_field() {
    let mut button = Button::new();
    let report = apply_fields(
        &mut button,
        [
            ("ActionType", json!("reply")),
            ("ActionBody", json!("menu")),
            ("Columns", json!("3")),
            ("Rows", json!(2)),
            ("Text", json!("Menu")),
            ("TextSize", json!("large")),
            ("BgLoop", json!("true")),
        ],
    );

    assert!(report.is_clean());
    assert_eq!(report.applied, 7);
    assert_eq!(button.columns(), 3);
    assert_eq!(button.rows(), 2);
    assert_eq!(button.text_size(), Some(TextSize::Large));
    assert_eq!(button.bg_loop(), Some(true));
    assert!(button.is_valid());
}

#[rstest]
fn action_type_is_applied_before_body() {
    let url = format!("https://example.com/{}", "q".repeat(150));
    let mut button = Button::new();
    apply_fields(
        &mut button,
        [
            ("ActionBody", Value::from(url.as_str())),
            ("ActionType", json!("ОткрытьСсылку")),
        ],
    );

    assert_eq!(button.action_type(), ActionType::OpenUrl);
    assert_eq!(button.action_body(), Some(url.as_str()));
}

#[rstest]
fn rejected_values_leave_fields_unchanged() {
    let mut button = Button::with_action_body("keep");
    button.set_columns(2);

    let report = apply_fields(
        &mut button,
        [
            ("Columns", json!(0)),
            ("BgColor", json!("blue")),
            ("ActionType", json!(null)),
        ],
    );

    assert_eq!(report.applied, 0);
    assert_eq!(
        report
            .rejected
            .iter()
            .map(FieldError::field)
            .collect::<Vec<_>>(),
        vec!["ActionType", "Columns", "BgColor"]
    );
    assert_eq!(button.columns(), 2);
    assert_eq!(button.bg_color(), None);
    assert_eq!(button.action_type(), ActionType::Reply);
}

#[rstest]
fn unknown_names_are_reported_and_skipped() {
    let mut button = Button::new();
    let report = apply_fields(&mut button, [("Colour", json!("#fff")), ("rows", json!(2))]);

    assert_eq!(
        report,
        ImportReport {
            applied: 0,
            rejected: Vec::new(),
            unknown: vec!["Colour".to_owned(), "rows".to_owned()],
        }
    );
    assert_eq!(button.rows(), 1);
}

#[rstest]
fn later_values_override_earlier_ones() {
    let mut button = Button::new();
    apply_fields(
        &mut button,
        vec![("Text", json!("first")), ("Text", json!("second"))],
    );
    assert_eq!(button.text(), Some("second"));
}

#[rstest]
fn accepts_owned_map_sources() {
    let source: BTreeMap<String, Value> = [
        ("ActionBody".to_owned(), json!("from map")),
        ("TextOpacity".to_owned(), json!("75")),
    ]
    .into_iter()
    .collect();

    let mut button = Button::new();
    let report = apply_fields(&mut button, source);

    assert!(report.is_clean());
    assert_eq!(button.text_opacity(), Some(75));
    assert_eq!(button.action_body(), Some("from map"));
}

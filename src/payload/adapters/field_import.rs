//! Boundary for producers of raw button fields.
//!
//! External sources (legacy conversation flows, stored templates) describe a
//! button as loosely typed `(field name, value)` pairs keyed by wire names.
//! [`apply_fields`] routes every pair through the same rule a direct setter
//! call would use, so imported buttons obey exactly the same constraints.

use serde_json::Value;

use crate::payload::{
    domain::{Button, ButtonField},
    error::FieldError,
};

/// Outcome of applying raw fields to a button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of values accepted.
    pub applied: usize,
    /// Values refused by a field rule; those fields kept their prior value.
    pub rejected: Vec<FieldError>,
    /// Field names that are not button wire keys.
    pub unknown: Vec<String>,
}

impl ImportReport {
    /// Returns `true` when every pair was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.unknown.is_empty()
    }
}

/// Applies raw `(field name, value)` pairs to `button`.
///
/// `ActionType` pairs are applied before all others so that the action body
/// is truncated (or not) according to the imported action type, whatever the
/// order of the source. Remaining pairs keep their source order; a later
/// pair for the same field overrides an earlier accepted one.
///
/// # Examples
///
/// ```
/// use viber_payloads::payload::adapters::apply_fields;
/// use viber_payloads::payload::domain::{ActionType, Button};
/// use serde_json::json;
///
/// let mut button = Button::new();
/// let report = apply_fields(
///     &mut button,
///     [
///         ("ActionBody", json!("https://example.com/very/long/path")),
///         ("ActionType", json!("open-url")),
///         ("Columns", json!("9")),
///         ("Colour", json!("#fff")),
///     ],
/// );
///
/// assert_eq!(button.action_type(), ActionType::OpenUrl);
/// assert_eq!(button.columns(), 6);
/// assert_eq!(report.applied, 2);
/// assert_eq!(report.rejected.len(), 1);
/// assert_eq!(report.unknown, vec!["Colour".to_owned()]);
/// ```
pub fn apply_fields<I, K>(button: &mut Button, fields: I) -> ImportReport
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut report = ImportReport::default();
    let mut known = Vec::new();

    for (name, raw) in fields {
        match ButtonField::try_from(name.as_ref()) {
            Ok(field) => known.push((field, raw)),
            Err(error) => {
                tracing::warn!(%error, "skipping unknown button field");
                report.unknown.push(name.as_ref().to_owned());
            }
        }
    }

    known.sort_by_key(|(field, _)| *field != ButtonField::ActionType);

    for (field, raw) in known {
        match button.set_field(field, &raw) {
            Ok(()) => report.applied += 1,
            Err(error) => {
                tracing::debug!(field = error.field(), %error, "rejected imported value");
                report.rejected.push(error);
            }
        }
    }

    tracing::debug!(
        applied = report.applied,
        rejected = report.rejected.len(),
        unknown = report.unknown.len(),
        "imported button fields"
    );
    report
}

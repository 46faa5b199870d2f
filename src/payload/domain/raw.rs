//! Coercion of loosely typed raw values into the typed fields of an entity.
//!
//! Setters accept anything convertible into a [`serde_json::Value`] so that
//! values arriving from external flows (strings, floats, integers) go through
//! the same rules as values set directly by Rust callers.

use serde_json::Value;

use crate::payload::error::FieldError;

/// Coerces a raw value to an integer.
///
/// Integers pass through, finite floats are truncated toward zero, and
/// strings are trimmed and parsed in either integer or float form.
///
/// # Errors
///
/// Returns [`FieldError::NotAnInteger`] for anything else.
pub fn coerce_int(field: &'static str, raw: &Value) -> Result<i64, FieldError> {
    let parsed = match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate_float)),
        Value::String(text) => parse_int_text(text.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| FieldError::NotAnInteger {
        field,
        raw: raw.to_string(),
    })
}

/// Coerces a raw value to an integer inside `min..=max`.
///
/// # Errors
///
/// Returns [`FieldError::NotAnInteger`] when coercion fails and
/// [`FieldError::OutOfRange`] when the integer falls outside the bounds.
pub fn coerce_in_range(
    field: &'static str,
    raw: &Value,
    min: u8,
    max: u8,
) -> Result<u8, FieldError> {
    let actual = coerce_int(field, raw)?;
    u8::try_from(actual)
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or(FieldError::OutOfRange {
            field,
            min: i64::from(min),
            max: i64::from(max),
            actual,
        })
}

/// Coerces a raw value to a boolean.
///
/// Accepts JSON booleans, the integers `0`/`1`, and the strings
/// `true`/`false`/`1`/`0` (case-insensitive).
///
/// # Errors
///
/// Returns [`FieldError::NotABoolean`] for anything else.
pub fn coerce_bool(field: &'static str, raw: &Value) -> Result<bool, FieldError> {
    let parsed = match raw {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| FieldError::NotABoolean {
        field,
        raw: raw.to_string(),
    })
}

/// Coerces a raw value to a string.
///
/// Numbers are rendered in their JSON form so that numeric flow values can be
/// used as reply bodies or captions.
///
/// # Errors
///
/// Returns [`FieldError::NotAString`] for booleans, nulls, arrays, and objects.
pub fn coerce_string(field: &'static str, raw: &Value) -> Result<String, FieldError> {
    match raw {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(FieldError::NotAString {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Like [`coerce_string`] but refuses empty strings.
///
/// # Errors
///
/// Returns [`FieldError::Empty`] for `""` in addition to the errors of
/// [`coerce_string`].
pub fn coerce_non_empty_string(field: &'static str, raw: &Value) -> Result<String, FieldError> {
    let text = coerce_string(field, raw)?;
    if text.is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(text)
}

/// Keeps at most `max` characters (not bytes) of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Settles the outcome of a fail-soft setter.
///
/// A rejection is logged and reported as `false`; the caller has already
/// left the field untouched.
pub(crate) fn settle(outcome: Result<(), FieldError>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(field = error.field(), %error, "rejected field value");
            false
        }
    }
}

fn parse_int_text(text: &str) -> Option<i64> {
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(truncate_float))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is already truncated; out-of-range floats saturate and fail the range check"
)]
fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    truncated.is_finite().then_some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(3), Some(3))]
    #[case(json!("4"), Some(4))]
    #[case(json!(" 5 "), Some(5))]
    #[case(json!(2.9), Some(2))]
    #[case(json!("6.0"), Some(6))]
    #[case(json!(-1), Some(-1))]
    #[case(json!("three"), None)]
    #[case(json!(""), None)]
    #[case(json!(true), None)]
    #[case(json!(null), None)]
    #[case(json!([1]), None)]
    fn coerce_int_cases(#[case] raw: Value, #[case] expected: Option<i64>) {
        assert_eq!(coerce_int("Columns", &raw).ok(), expected);
    }

    #[rstest]
    fn coerce_in_range_reports_bounds() {
        let error = coerce_in_range("Rows", &json!(9), 1, 7).expect_err("out of range");
        assert_eq!(
            error,
            FieldError::OutOfRange {
                field: "Rows",
                min: 1,
                max: 7,
                actual: 9,
            }
        );
    }

    #[rstest]
    #[case(json!(true), Some(true))]
    #[case(json!("False"), Some(false))]
    #[case(json!(1), Some(true))]
    #[case(json!(0), Some(false))]
    #[case(json!(2), None)]
    #[case(json!("yes"), None)]
    fn coerce_bool_cases(#[case] raw: Value, #[case] expected: Option<bool>) {
        assert_eq!(coerce_bool("BgLoop", &raw).ok(), expected);
    }

    #[rstest]
    #[case(json!("hi"), Some("hi"))]
    #[case(json!(42), Some("42"))]
    #[case(json!(false), None)]
    fn coerce_string_cases(#[case] raw: Value, #[case] expected: Option<&str>) {
        assert_eq!(coerce_string("Text", &raw).ok().as_deref(), expected);
    }

    #[rstest]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("привет мир", 6), "привет");
        assert_eq!(truncate_chars("short", 28), "short");
    }
}

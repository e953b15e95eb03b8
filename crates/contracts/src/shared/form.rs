//! Raw form values of the detail panel and the create wizard.
//!
//! Inputs keep whatever the user typed; values are parsed into typed DTOs only
//! on submit (`HubEntity::dto_from_form`).

use std::collections::BTreeMap;

use super::metadata::FieldMetadata;

pub type FormValues = BTreeMap<String, String>;

/// Raw value of a field, empty when absent
pub fn value<'a>(values: &'a FormValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or("")
}

/// Trimmed value, `None` when blank
pub fn optional(values: &FormValues, name: &str) -> Option<String> {
    let v = value(values, name).trim();
    (!v.is_empty()).then(|| v.to_string())
}

pub fn text(values: &FormValues, name: &str) -> String {
    value(values, name).trim().to_string()
}

pub fn flag(values: &FormValues, name: &str) -> bool {
    value(values, name) == "true"
}

pub fn number(values: &FormValues, name: &str) -> Result<f64, String> {
    let v = value(values, name).trim();
    if v.is_empty() {
        return Ok(0.0);
    }
    v.parse()
        .map_err(|_| format!("'{}' is not a number", v))
}

pub fn integer(values: &FormValues, name: &str) -> Result<i64, String> {
    let v = value(values, name).trim();
    if v.is_empty() {
        return Ok(0);
    }
    v.parse()
        .map_err(|_| format!("'{}' is not a whole number", v))
}

pub fn optional_integer(values: &FormValues, name: &str) -> Result<Option<i64>, String> {
    optional(values, name)
        .map(|v| v.parse().map_err(|_| format!("'{}' is not a whole number", v)))
        .transpose()
}

pub fn optional_date(values: &FormValues, name: &str) -> Result<Option<chrono::NaiveDate>, String> {
    optional(values, name)
        .map(|v| {
            chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|_| format!("'{}' is not a date", v))
        })
        .transpose()
}

/// Validates the form-visible fields, optionally only those of one wizard step.
///
/// Returns the first error in field order.
pub fn validate_fields(
    fields: &[FieldMetadata],
    values: &FormValues,
    step: Option<usize>,
) -> Result<(), String> {
    fields
        .iter()
        .filter(|f| f.visible_in_form())
        .filter(|f| step.map_or(true, |s| f.step == s))
        .try_for_each(|f| f.validate(value(values, f.name)))
}

/// Builds form values from `(name, value)` pairs
pub fn form_values<I, K, V>(pairs: I) -> FormValues
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

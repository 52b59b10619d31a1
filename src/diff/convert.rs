//! Per-type formatting of attribute values.

use crate::model::{AttributeType, AttributeValue};
use crate::utils::config::{DiffConfig, CHECKBOX_CHECKED, DATETIME_INPUT_FORMATS, DATE_INPUT_FORMATS};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;
use std::fmt::Write;

/// Format a value for display according to its declared type
///
/// Falsy values (`None`, `false`, `0`, `""`) render as the empty value
/// regardless of type. Dates are rendered at day granularity, checked
/// checkboxes as a check mark, everything else verbatim.
pub fn convert_value(
    value: Option<&AttributeValue>,
    attribute_type: &AttributeType,
    config: &DiffConfig,
) -> String {
    let value = match value {
        Some(v) if v.is_truthy() => v,
        _ => return config.empty_value.clone(),
    };

    match attribute_type {
        AttributeType::Date => format_date(value, &config.date_format).unwrap_or_else(|| {
            warn!("Unrecognized date value {:?}, showing as-is", value);
            value.to_string()
        }),
        AttributeType::Checkbox => {
            if is_checked(value) {
                CHECKBOX_CHECKED.to_string()
            } else {
                config.empty_value.clone()
            }
        }
        AttributeType::Other(_) => value.to_string(),
    }
}

// Only literal `true` and the string "1" count as checked.
fn is_checked(value: &AttributeValue) -> bool {
    match value {
        AttributeValue::Bool(b) => *b,
        AttributeValue::Text(s) => s == "1",
        AttributeValue::Number(_) => false,
    }
}

/// Render a date value with `format`, dropping any time of day
///
/// Text is parsed with [`parse_date`]; numbers are Unix epoch
/// milliseconds. Returns `None` if the value is not a date or the
/// format cannot be rendered.
pub fn format_date(value: &AttributeValue, format: &str) -> Option<String> {
    let date = match value {
        AttributeValue::Text(text) => parse_date(text)?,
        AttributeValue::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::<Utc>::from_timestamp_millis(millis)?.date_naive()
        }
        AttributeValue::Bool(_) => return None,
    };

    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Parse the calendar date out of a date or timestamp string
///
/// Timestamps with an offset keep the date as seen in that offset.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    DATETIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_INPUT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

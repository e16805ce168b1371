//! Scalar casts from scraped JSON values.
//!
//! Every cast maps JSON `null` to `None`. Casts that can meet text which is
//! expected to be well-formed (`to_float`, `to_date`) return a [`CastError`]
//! carrying that text; the rest are total and answer `None` for anything
//! they cannot represent.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::CastError;

/// Canonical release-date rendering: `05 May 2005`.
pub const DATE_FORMAT: &str = "%d %B %Y";

const TRUE_LITERALS: &[&str] = &["True", "true", "Yes", "yes"];
const FALSE_LITERALS: &[&str] = &["False", "false", "No", "no"];

/// Outcome of a boolean cast.
///
/// `Unrecognized` is distinct from both answers: the value was present but is
/// not one of the known literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unrecognized,
}

impl Truth {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unrecognized => None,
        }
    }
}

pub fn to_string(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Cast to an integer.
///
/// Strings are accepted only when, after an optional leading `-`, every
/// character is an ASCII digit. The empty string is `None`, never `0`.
pub fn to_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => int_from_text(s),
        _ => None,
    }
}

/// Strict integer parse used by [`to_int`] and the markup normalizers.
pub fn int_from_text(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Cast to a float. The empty string is `0.0`; other malformed text fails.
pub fn to_float(v: &Value) -> Result<Option<f64>, CastError> {
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => float_from_text(s).map(Some),
        other => Err(CastError::float(other.to_string())),
    }
}

pub fn float_from_text(s: &str) -> Result<f64, CastError> {
    if s.is_empty() {
        return Ok(0.0);
    }
    s.trim().parse::<f64>().map_err(|_| CastError::float(s))
}

pub fn to_bool(v: &Value) -> Option<Truth> {
    match v {
        Value::Null => None,
        Value::Bool(true) => Some(Truth::True),
        Value::Bool(false) => Some(Truth::False),
        Value::String(s) => Some(truth_from_text(s)),
        _ => Some(Truth::Unrecognized),
    }
}

pub fn truth_from_text(s: &str) -> Truth {
    if TRUE_LITERALS.contains(&s) {
        Truth::True
    } else if FALSE_LITERALS.contains(&s) {
        Truth::False
    } else {
        Truth::Unrecognized
    }
}

/// Cast to canonical date text. The empty string is treated as absent.
pub fn to_date(v: &Value) -> Result<Option<String>, CastError> {
    match v {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => date_from_text(s).map(Some),
        other => Err(CastError::date(other.to_string())),
    }
}

/// Parse text strictly against [`DATE_FORMAT`] and re-render it.
pub fn date_from_text(s: &str) -> Result<String, CastError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map(format_date)
        .map_err(|_| CastError::date(s))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Cast to a non-empty list of strings.
///
/// A bare string becomes a one-element list. Empty strings, empty arrays and
/// booleans (the earlier quest-flag generation) are `None`.
pub fn to_string_list(v: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match v {
        Value::String(s) => vec![s.trim().to_string()],
        Value::Array(values) => values
            .iter()
            .filter_map(to_string)
            .map(|s| s.trim().to_string())
            .collect(),
        _ => return None,
    };
    let items: Vec<String> = items.into_iter().filter(|s| !s.is_empty()).collect();
    if items.is_empty() { None } else { Some(items) }
}

#[cfg(test)]
#[path = "tests/cast_tests.rs"]
mod tests;

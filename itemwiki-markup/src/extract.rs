//! Field extraction from a located item infobox.
//!
//! A key missing from the template is [`Field::Absent`], a normal outcome
//! that leaves the record's value untouched. Only a present value that fails
//! to normalize is [`Field::Invalid`].

use itemwiki_core::CastError;

use crate::normalize::{
    Weight, normalize_examine, normalize_quest, normalize_release, normalize_seller,
    normalize_store_price, normalize_weight,
};
use crate::template::Template;

/// Outcome of extracting one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Present(T),
    Invalid(CastError),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Result<T, CastError>> for Field<T> {
    fn from(r: Result<T, CastError>) -> Self {
        match r {
            Ok(v) => Self::Present(v),
            Err(e) => Self::Invalid(e),
        }
    }
}

/// Raw value of `key`, or `None` when the key is absent.
pub fn get_field<'t>(template: &'t Template, key: &str) -> Option<&'t str> {
    template.get(key)
}

/// Look up `key` and run `rule` over its raw value.
pub fn extract_with<T>(template: &Template, key: &str, rule: impl FnOnce(&str) -> T) -> Field<T> {
    match get_field(template, key) {
        Some(raw) => Field::Present(rule(raw)),
        None => Field::Absent,
    }
}

/// Like [`extract_with`] for rules that can fail.
pub fn try_extract_with<T>(
    template: &Template,
    key: &str,
    rule: impl FnOnce(&str) -> Result<T, CastError>,
) -> Field<T> {
    match get_field(template, key) {
        Some(raw) => rule(raw).into(),
        None => Field::Absent,
    }
}

/// The normalized fields of an item infobox.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoboxFields {
    pub quest: Field<Option<Vec<String>>>,
    pub weight: Field<Weight>,
    pub release_date: Field<Option<String>>,
    pub examine: Field<Option<Vec<String>>>,
    pub store_price: Field<Option<i64>>,
    pub seller: Field<Option<Vec<String>>>,
}

impl InfoboxFields {
    pub fn from_template(template: &Template) -> Self {
        Self {
            quest: extract_with(template, "quest", normalize_quest),
            weight: try_extract_with(template, "weight", normalize_weight),
            release_date: try_extract_with(template, "release", normalize_release),
            examine: extract_with(template, "examine", normalize_examine),
            store_price: extract_with(template, "store", normalize_store_price),
            seller: extract_with(template, "seller", normalize_seller),
        }
    }
}

use thiserror::Error;

use crate::slot::Slot;

/// A value that was expected to be well-formed could not be cast.
///
/// Carries the offending text so callers can report it verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    /// Malformed numeric text on the float path
    #[error("could not convert to float: {0:?}")]
    Float(String),

    /// Date text that matches none of the accepted formats
    #[error("could not parse date: {0:?}")]
    Date(String),
}

impl CastError {
    pub fn float(text: impl Into<String>) -> Self {
        Self::Float(text.into())
    }

    pub fn date(text: impl Into<String>) -> Self {
        Self::Date(text.into())
    }

    /// The text that failed to cast.
    pub fn text(&self) -> &str {
        match self {
            Self::Float(t) | Self::Date(t) => t,
        }
    }
}

/// Errors raised while building an item record from scraped JSON.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The scraped payload is not a JSON object
    #[error("scraped payload is not a JSON object")]
    NotAnObject,

    /// A base key is missing from the scraped payload
    #[error("scraped payload is missing key '{0}'")]
    SchemaMismatch(String),

    /// `id` or `name` is present but null or not castable
    #[error("scraped payload has no usable '{0}'")]
    MissingIdentity(&'static str),

    /// A base field holds malformed text
    #[error("field '{field}': {source}")]
    Cast {
        field: &'static str,
        #[source]
        source: CastError,
    },

    /// Bonuses were attached to an item that is not equipable
    #[error("item {0} is not equipable; bonuses cannot be attached")]
    NotEquipable(i64),
}

impl RecordError {
    pub fn schema_mismatch(key: impl Into<String>) -> Self {
        Self::SchemaMismatch(key.into())
    }

    pub fn cast(field: &'static str, source: CastError) -> Self {
        Self::Cast { field, source }
    }
}

/// Reasons a combat-bonus block cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BonusError {
    /// The template has no usable `slot` value
    #[error("equipment slot could not be determined")]
    SlotUndetermined,

    /// The `slot` value is not part of the slot vocabulary
    #[error("unknown equipment slot: '{0}'")]
    UnknownSlot(String),

    /// A weapon slot without an attack speed
    #[error("slot '{0}' requires an attack speed")]
    MissingAttackSpeed(Slot),
}

//! Output schema generations.
//!
//! Which optional fields an output record carries is fixed by the chosen
//! [`SchemaVersion`], never inferred from what the corpus happens to contain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// First generation: split weight, store fields, bare-string examine.
    Legacy,
    #[default]
    Current,
}

/// How the examine list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamineFormat {
    /// Always a JSON array.
    List,
    /// A single variant becomes a bare string; several stay an array.
    CollapseSingle,
}

/// Field set of one schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaProfile {
    /// Emit `weight_equipped` after `weight` for equipable items.
    pub split_weight: bool,
    /// Emit `store_price` and `seller` after `release_date`.
    pub store_fields: bool,
    pub examine: ExamineFormat,
}

impl SchemaVersion {
    pub fn all() -> &'static [SchemaVersion] {
        &[SchemaVersion::Legacy, SchemaVersion::Current]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }

    pub fn profile(self) -> SchemaProfile {
        match self {
            Self::Legacy => SchemaProfile {
                split_weight: true,
                store_fields: true,
                examine: ExamineFormat::CollapseSingle,
            },
            Self::Current => SchemaProfile {
                split_weight: false,
                store_fields: false,
                examine: ExamineFormat::List,
            },
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v1" => Ok(Self::Legacy),
            "current" | "v2" => Ok(Self::Current),
            other => Err(format!(
                "unknown schema '{}' (expected one of: {})",
                other,
                Self::all()
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl Default for SchemaProfile {
    fn default() -> Self {
        SchemaVersion::default().profile()
    }
}

//! Data model and scalar casts for normalized item records.
//!
//! This crate has no knowledge of wiki markup; it defines what a finished
//! record looks like and how raw scraped values are cast into it.

pub mod cast;
pub mod error;
pub mod record;
pub mod slot;

pub use cast::{DATE_FORMAT, Truth};
pub use error::{BonusError, CastError, RecordError};
pub use record::{BASE_KEYS, BonusSet, CombatModifiers, ItemRecord, ItemRecordBuilder, ScrapedItem};
pub use slot::{Slot, SlotParseError};

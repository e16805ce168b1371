//! Wiki markup extraction and field normalization.
//!
//! Finds a named template on an item's wiki page, pulls named fields out of
//! it, and reduces irregular wiki prose to typed values:
//!
//! ```text
//! corpus[name] -> templates -> first "infobox item" -> fields -> normalizers
//! ```
//!
//! No MediaWiki semantics beyond template and link delimiters are modeled.

pub mod extract;
pub mod locator;
pub mod normalize;
pub mod template;

pub use extract::{Field, InfoboxFields, get_field};
pub use locator::{
    BONUSES, ITEM_INFOBOX, NotFound, PageSource, TemplateMatch, find_in_markup, find_template,
    name_contains,
};
pub use normalize::{BonusExtraction, ModifierNote, Weight, extract_bonuses};
pub use template::{Param, Template, parse_templates};

//! Field normalizers: one rule per semantic field.
//!
//! Each rule takes the raw parameter value of a located template and reduces
//! it to a canonical scalar or ordered list. Absent fields never reach these
//! functions; see [`crate::extract`].

mod bonuses;
mod quest;
mod release;
mod text;
mod weight;

pub use bonuses::{BONUS_KEYS, BonusExtraction, ModifierNote, extract_bonuses, modifier_from_text};
pub use quest::normalize_quest;
pub use release::normalize_release;
pub use text::{normalize_examine, normalize_seller, normalize_store_price, split_variants};
pub use weight::{Weight, normalize_weight};

/// Trim and drop every `[` and `]` (wiki-link brackets).
pub fn strip_links(raw: &str) -> String {
    raw.trim().replace(['[', ']'], "")
}

/// Drop bold and italic quote markers.
pub(crate) fn strip_emphasis(s: &str) -> String {
    s.replace("'''", "").replace("''", "")
}

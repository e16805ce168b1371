use chrono::NaiveDate;
use itemwiki_core::CastError;
use itemwiki_core::cast::{date_from_text, format_date};

use super::strip_links;

/// Source formats seen in release fields besides the canonical one.
const SOURCE_FORMATS: &[&str] = &["%d %B %Y", "%B %d, %Y", "%d %B, %Y", "%Y-%m-%d"];

/// Normalize a release date to canonical `DD Month YYYY` text.
///
/// Link brackets are stripped (`[[5 May]] [[2005]]`), known source formats
/// are recognized, and anything else goes to the strict date cast, whose
/// failure is returned with the offending text.
pub fn normalize_release(raw: &str) -> Result<Option<String>, CastError> {
    let text = strip_links(raw);
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    for format in SOURCE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(Some(format_date(date)));
        }
    }
    date_from_text(text).map(Some)
}

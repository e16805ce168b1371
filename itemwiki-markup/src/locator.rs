//! Locate a named template on an item's wiki page.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::template::{Template, parse_templates};

/// Name fragment identifying the item infobox template.
pub const ITEM_INFOBOX: &str = "infobox item";

/// Name fragment identifying the combat-bonuses template.
pub const BONUSES: &str = "bonuses";

/// A read-only mapping from item display name to raw markup.
pub trait PageSource {
    fn page(&self, name: &str) -> Option<&str>;
}

impl PageSource for HashMap<String, String> {
    fn page(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PageSource for BTreeMap<String, String> {
    fn page(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Why no template was located. Both cases are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("no wiki page for '{0}'")]
    NoPage(String),

    #[error("page '{name}' has no template matching the query ({templates} templates scanned)")]
    NoTemplate { name: String, templates: usize },
}

/// The first matching template plus how many templates matched in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatch {
    pub template: Template,
    /// Number of templates on the page satisfying the predicate. Only the
    /// first is used; a count above one means later ones were ignored.
    pub match_count: usize,
}

/// Predicate matching template names that contain `needle`.
pub fn name_contains(needle: &str) -> impl Fn(&str) -> bool + '_ {
    move |name: &str| name.contains(needle)
}

/// Find the first template on `item_name`'s page whose lowercased, trimmed
/// name satisfies `predicate`.
pub fn find_template<S, P>(corpus: &S, item_name: &str, predicate: P) -> Result<TemplateMatch, NotFound>
where
    S: PageSource + ?Sized,
    P: Fn(&str) -> bool,
{
    let Some(markup) = corpus.page(item_name) else {
        log::debug!("No wiki page for '{}'", item_name);
        return Err(NotFound::NoPage(item_name.to_string()));
    };
    find_in_markup(markup, item_name, predicate)
}

/// Same as [`find_template`] for markup that has already been looked up.
pub fn find_in_markup<P>(markup: &str, item_name: &str, predicate: P) -> Result<TemplateMatch, NotFound>
where
    P: Fn(&str) -> bool,
{
    let templates = parse_templates(markup);
    let total = templates.len();
    let mut matching = templates
        .into_iter()
        .filter(|t| predicate(&t.match_name()));

    let Some(first) = matching.next() else {
        log::debug!("'{}': none of {} templates matched", item_name, total);
        return Err(NotFound::NoTemplate {
            name: item_name.to_string(),
            templates: total,
        });
    };
    let match_count = 1 + matching.count();
    log::debug!(
        "'{}': using template '{}' ({} matching)",
        item_name,
        first.name(),
        match_count
    );

    Ok(TemplateMatch {
        template: first,
        match_count,
    })
}

//! Per-item enrichment.
//!
//! ```text
//! scraped -> page lookup -+- no page ----------------------> [NoWikiPage]
//!                         +- page -> item infobox -+- none -> [NoInfobox]
//!                                                  +- fields applied
//!                                                       +- not equipable -> [Finalized]
//!                                                       +- equipable -> bonuses
//!                                                            +- ok -----> [WithBonuses]
//!                                                            +- failed -> [BonusesMissing]
//! ```
//!
//! Every step is a read-only probe of the shared [`Corpora`], so items can
//! be enriched in any order and in parallel.

use std::sync::Arc;

use itemwiki_core::{ItemRecord, ScrapedItem};
use itemwiki_markup::{
    BONUSES, Field, ITEM_INFOBOX, InfoboxFields, ModifierNote, PageSource, Template,
    extract_bonuses, find_in_markup, name_contains,
};
use serde_json::Value;

use crate::corpus::{BuyLimits, Corpora};
use crate::diagnostics::{Diagnostics, Stage};
use crate::error::ItemError;
use crate::settings::EngineConfig;

/// Buy limit for a tradeable item whose limit is unknown.
pub const UNKNOWN_BUY_LIMIT: i64 = -1;

/// Terminal state of one item's enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    NoWikiPage,
    NoInfobox,
    /// Infobox applied to an item that is not equipable.
    Finalized,
    WithBonuses,
    /// Equipable, but no bonus block could be built.
    BonusesMissing,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoWikiPage => "NO PAGE",
            Self::NoInfobox => "NO INFOBOX",
            Self::Finalized => "FINALIZED",
            Self::WithBonuses => "BONUSES",
            Self::BonusesMissing => "BONUSES MISSING",
        }
    }
}

/// A finished record and how it got there.
#[derive(Debug, Clone)]
pub struct Enriched {
    /// Input key. Names the output file and the log entry.
    pub key: i64,
    pub record: ItemRecord,
    pub outcome: Outcome,
    pub diagnostics: Diagnostics,
}

impl Enriched {
    /// An equipable record without bonuses cannot go to the main output.
    pub fn needs_review(&self) -> bool {
        self.record.is_equipable() && self.record.bonuses().is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Enricher {
    corpora: Arc<Corpora>,
    base_url: String,
}

impl Enricher {
    pub fn new(corpora: Arc<Corpora>, config: &EngineConfig) -> Self {
        Self {
            corpora,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn corpora(&self) -> &Corpora {
        &self.corpora
    }

    /// Enrich one scraped payload.
    ///
    /// Only an unusable scraped payload is an error; every markup problem
    /// becomes a diagnostic and the scraped value stands.
    pub fn enrich(&self, id: i64, payload: &Value) -> Result<Enriched, ItemError> {
        let ScrapedItem {
            mut record,
            unrecognized,
        } = ItemRecord::from_scraped(payload)
            .map_err(|e| ItemError::new(id, Stage::Scraped, e.to_string()))?;

        let mut diagnostics = Diagnostics::new();
        if record.id != id {
            diagnostics.warn(
                Stage::Scraped,
                format!("payload id {} differs from its key {}", record.id, id),
            );
        }
        for (key, literal) in unrecognized {
            log::warn!("{} '{}': unrecognized {} literal {}", id, record.name, key, literal);
            diagnostics.warn(
                Stage::Scraped,
                format!("unrecognized {} literal {}, left null", key, literal),
            );
        }

        let outcome = self.enrich_from_wiki(&mut record, &mut diagnostics);
        Ok(Enriched {
            key: id,
            record,
            outcome,
            diagnostics,
        })
    }

    fn enrich_from_wiki(&self, record: &mut ItemRecord, diagnostics: &mut Diagnostics) -> Outcome {
        let Some(markup) = self.corpora.items.page(&record.name) else {
            diagnostics.info(Stage::WikiPage, "no wiki page, scraped fields only");
            flag_if_equipable(record, diagnostics, "no wiki page");
            return Outcome::NoWikiPage;
        };
        record.url = Some(self.page_url(&record.name));

        let infobox = match find_in_markup(markup, &record.name, name_contains(ITEM_INFOBOX)) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("{} '{}': {}", record.id, record.name, e);
                diagnostics.warn(Stage::Infobox, e.to_string());
                flag_if_equipable(record, diagnostics, "no item infobox");
                return Outcome::NoInfobox;
            }
        };
        if infobox.match_count > 1 {
            diagnostics.info(
                Stage::Infobox,
                format!(
                    "{} item infoboxes on page, using the first",
                    infobox.match_count
                ),
            );
        }

        apply_infobox(record, &infobox.template, diagnostics);
        apply_buy_limit(record, &self.corpora.buy_limits);

        if !record.is_equipable() {
            return Outcome::Finalized;
        }
        self.attach_bonuses(record, markup, diagnostics)
    }

    /// The bonuses corpus is searched first; items missing from it fall back
    /// to their item page, which usually carries both infoboxes.
    fn attach_bonuses(
        &self,
        record: &mut ItemRecord,
        item_page: &str,
        diagnostics: &mut Diagnostics,
    ) -> Outcome {
        let page = self.corpora.bonuses.page(&record.name).unwrap_or(item_page);
        let found = match find_in_markup(page, &record.name, name_contains(BONUSES)) {
            Ok(found) => found,
            Err(e) => {
                log::error!("{} '{}': {}", record.id, record.name, e);
                diagnostics.review(Stage::Bonuses, "no bonuses infobox");
                return Outcome::BonusesMissing;
            }
        };
        if found.match_count > 1 {
            diagnostics.info(
                Stage::Bonuses,
                format!(
                    "{} bonuses infoboxes on page, using the first",
                    found.match_count
                ),
            );
        }

        let extraction = match extract_bonuses(&found.template) {
            Ok(extraction) => extraction,
            Err(e) => {
                log::error!("{} '{}': {}", record.id, record.name, e);
                diagnostics.review(Stage::Bonuses, e.to_string());
                return Outcome::BonusesMissing;
            }
        };
        for note in &extraction.notes {
            let reason = match note {
                ModifierNote::Absent(key) => format!("modifier '{}' absent, left null", key),
                ModifierNote::Unparseable { key, text } => {
                    format!("modifier '{}' unparseable ({:?}), left null", key, text)
                }
            };
            diagnostics.info(Stage::Bonuses, reason);
        }

        match record.set_bonuses(extraction.bonuses) {
            Ok(()) => Outcome::WithBonuses,
            Err(e) => {
                diagnostics.review(Stage::Bonuses, e.to_string());
                Outcome::BonusesMissing
            }
        }
    }

    /// `<base>/<name with spaces as underscores>`.
    pub fn page_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.trim().replace(' ', "_"))
    }
}

/// Overwrite scraped fields with whatever the infobox supplies.
fn apply_infobox(record: &mut ItemRecord, template: &Template, diagnostics: &mut Diagnostics) {
    let fields = InfoboxFields::from_template(template);

    if let Some(quests) = take(fields.quest, "quest", diagnostics) {
        record.quest_item = quests;
    }
    if let Some(weight) = take(fields.weight, "weight", diagnostics) {
        record.weight = Some(weight.inventory);
        record.weight_equipped = Some(weight.equipped);
    }
    if let Some(date) = take(fields.release_date, "release", diagnostics) {
        record.release_date = date;
    }
    match take(fields.examine, "examine", diagnostics) {
        Some(Some(examine)) => record.examine = Some(examine),
        Some(None) => diagnostics.info(Stage::Infobox, "examine is blank, keeping scraped text"),
        None => {}
    }
    if let Some(price) = take(fields.store_price, "store", diagnostics) {
        record.store_price = price;
    }
    if let Some(sellers) = take(fields.seller, "seller", diagnostics) {
        record.seller = sellers;
    }
}

fn take<T>(field: Field<T>, key: &str, diagnostics: &mut Diagnostics) -> Option<T> {
    match field {
        Field::Present(value) => Some(value),
        Field::Absent => {
            diagnostics.info(Stage::Infobox, format!("'{}' absent", key));
            None
        }
        Field::Invalid(e) => {
            diagnostics.warn(
                Stage::Infobox,
                format!("'{}' unusable, keeping scraped value: {}", key, e),
            );
            None
        }
    }
}

/// Untradeable items have no limit. Tradeable ones take the table value,
/// then the scraped one, then [`UNKNOWN_BUY_LIMIT`].
fn apply_buy_limit(record: &mut ItemRecord, limits: &BuyLimits) {
    match record.tradeable {
        Some(false) => record.buy_limit = None,
        Some(true) => {
            record.buy_limit = limits
                .get(&record.name)
                .or(record.buy_limit)
                .or(Some(UNKNOWN_BUY_LIMIT));
        }
        None => {}
    }
}

fn flag_if_equipable(record: &ItemRecord, diagnostics: &mut Diagnostics, why: &str) {
    if record.is_equipable() {
        log::error!("{} '{}': equipable but {}", record.id, record.name, why);
        diagnostics.review(Stage::Bonuses, format!("equipable but {}", why));
    }
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;

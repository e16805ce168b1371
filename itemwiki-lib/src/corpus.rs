//! Read-only input snapshots.
//!
//! All corpora are loaded once, up front, and handed to the engine behind an
//! `Arc`. Nothing in the enrichment path touches the disk.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use itemwiki_core::cast;
use itemwiki_markup::PageSource;
use serde_json::{Map, Value};

use crate::error::EngineError;

/// Item display name to raw wiki markup.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pages: HashMap<String, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `{ "<name>": "<markup>" }` file. Non-string values are skipped.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let obj = read_object(path)?;
        let mut pages = HashMap::with_capacity(obj.len());
        for (name, value) in obj {
            match value {
                Value::String(markup) => {
                    pages.insert(name, markup);
                }
                other => log::warn!(
                    "{}: page '{}' is not text ({}), skipping",
                    path.display(),
                    name,
                    json_kind(&other)
                ),
            }
        }
        log::debug!("Loaded {} pages from {}", pages.len(), path.display());
        Ok(Self { pages })
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.pages.insert(name.into(), markup.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSource for Corpus {
    fn page(&self, name: &str) -> Option<&str> {
        self.pages.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Item display name to Grand Exchange buy limit.
#[derive(Debug, Clone, Default)]
pub struct BuyLimits {
    limits: HashMap<String, i64>,
}

impl BuyLimits {
    /// Load a `{ "<name>": <limit> }` file. Values go through `to_int`, so
    /// numeric strings are accepted; anything else is skipped.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let obj = read_object(path)?;
        let mut limits = HashMap::with_capacity(obj.len());
        for (name, value) in obj {
            match cast::to_int(&value) {
                Some(limit) => {
                    limits.insert(name, limit);
                }
                None => log::warn!(
                    "{}: buy limit for '{}' is not an integer, skipping",
                    path.display(),
                    name
                ),
            }
        }
        Ok(Self { limits })
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.limits.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for BuyLimits {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            limits: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Scraped payloads keyed by item id, in id order.
#[derive(Debug, Clone, Default)]
pub struct ScrapedItems {
    items: BTreeMap<i64, Value>,
    /// Keys that are not integer ids.
    rejected: Vec<String>,
}

impl ScrapedItems {
    /// Load Input A. Failure here aborts the run.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let obj = read_object(path)?;
        Ok(Self::from_object(obj))
    }

    pub fn from_object(obj: Map<String, Value>) -> Self {
        let mut out = Self::default();
        for (key, payload) in obj {
            match cast::int_from_text(key.trim()) {
                Some(id) => {
                    out.items.insert(id, payload);
                }
                None => out.rejected.push(key),
            }
        }
        out
    }

    pub fn insert(&mut self, id: i64, payload: Value) {
        self.items.insert(id, payload);
    }

    pub fn get(&self, id: i64) -> Option<&Value> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn into_parts(self) -> (Vec<(i64, Value)>, Vec<String>) {
        (self.items.into_iter().collect(), self.rejected)
    }
}

/// The read-only snapshot one batch runs against.
#[derive(Debug, Clone, Default)]
pub struct Corpora {
    /// Pages carrying the item infobox (Input B).
    pub items: Corpus,
    /// Pages carrying the bonuses infobox (Input C).
    pub bonuses: Corpus,
    pub buy_limits: BuyLimits,
}

fn read_object(path: &Path) -> Result<Map<String, Value>, EngineError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: display.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| EngineError::Json {
        path: display.clone(),
        source,
    })?;
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(EngineError::malformed(
            display,
            format!("expected a JSON object, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn corpus_skips_non_text_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "wiki.json",
            &json!({"Bones": "{{Infobox Item|name=Bones}}", "Broken": 5}),
        );
        let corpus = Corpus::load(&path).unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.page("Bones").is_some());
        assert!(corpus.page("Broken").is_none());
    }

    #[test]
    fn scraped_items_sort_and_reject_bad_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "items.json",
            &json!({"526": {"id": 526}, "4151": {"id": 4151}, "abc": {}}),
        );
        let items = ScrapedItems::load(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.rejected(), ["abc".to_string()]);
        let (ordered, _) = items.into_parts();
        assert_eq!(ordered[0].0, 526);
        assert_eq!(ordered[1].0, 4151);
    }

    #[test]
    fn non_object_input_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "items.json", &json!([1, 2, 3]));
        assert!(matches!(
            ScrapedItems::load(&path),
            Err(EngineError::MalformedInput { .. })
        ));
    }

    #[test]
    fn unreadable_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ScrapedItems::load(&dir.path().join("missing.json")),
            Err(EngineError::Io { .. })
        ));
    }

    #[test]
    fn buy_limits_accept_numeric_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "limits.json",
            &json!({"Abyssal whip": 70, "Bones": "10000", "Odd": "lots"}),
        );
        let limits = BuyLimits::load(&path).unwrap();
        assert_eq!(limits.get("Abyssal whip"), Some(70));
        assert_eq!(limits.get("Bones"), Some(10000));
        assert_eq!(limits.get("Odd"), None);
    }
}

//! One JSON file per item under the output directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::assemble;
use crate::enrich::Enriched;
use crate::schema::SchemaProfile;

/// Subdirectory for records that need manual follow-up.
pub const REVIEW_DIR: &str = "review";

/// Name of the batch diagnostics report.
pub const DIAGNOSTICS_FILE: &str = "diagnostics.log";

#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    profile: SchemaProfile,
    pretty: bool,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>, profile: SchemaProfile, pretty: bool) -> Self {
        Self {
            root: root.into(),
            profile,
            pretty,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn diagnostics_path(&self) -> PathBuf {
        self.root.join(DIAGNOSTICS_FILE)
    }

    /// `<root>/<key>.json`, or `<root>/review/<key>.json` for flagged records.
    pub fn path_for(&self, key: i64, review: bool) -> PathBuf {
        let file = format!("{}.json", key);
        if review {
            self.root.join(REVIEW_DIR).join(file)
        } else {
            self.root.join(file)
        }
    }

    /// Serialize and write one record, creating directories on demand.
    pub fn write(&self, item: &Enriched) -> io::Result<PathBuf> {
        let path = self.path_for(item.key, item.needs_review());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut text = assemble::to_json_string(&item.record, &self.profile, self.pretty)
            .map_err(io::Error::other)?;
        text.push('\n');
        std::fs::write(&path, text)?;
        Ok(path)
    }
}

//! Explicit diagnostics sink.
//!
//! The engine never configures logging. Each item's enrichment appends to
//! its own [`Diagnostics`]; the driver folds those into one
//! [`DiagnosticLog`] and writes it once at the end of the run.

use std::path::Path;

use crate::enrich::Outcome;
use crate::error::ItemError;

/// Enrichment stage a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Scraped,
    WikiPage,
    Infobox,
    Bonuses,
    Output,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Scraped => "scraped",
            Self::WikiPage => "wiki-page",
            Self::Infobox => "infobox",
            Self::Bonuses => "bonuses",
            Self::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Normal absence: no page, no key, duplicate template ignored.
    Info,
    /// Value kept at its scraped default because wiki text was unusable.
    Warning,
    /// Needs a human: equipable item without a bonus block.
    Review,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Review => "REVIEW",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub severity: Severity,
    pub reason: String,
}

/// Diagnostics collected while enriching one item.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: Stage, severity: Severity, reason: impl Into<String>) {
        let reason = reason.into();
        log::debug!("[{}] {}: {}", severity, stage, reason);
        self.entries.push(Diagnostic {
            stage,
            severity,
            reason,
        });
    }

    pub fn info(&mut self, stage: Stage, reason: impl Into<String>) {
        self.push(stage, Severity::Info, reason);
    }

    pub fn warn(&mut self, stage: Stage, reason: impl Into<String>) {
        self.push(stage, Severity::Warning, reason);
    }

    pub fn review(&mut self, stage: Stage, reason: impl Into<String>) {
        self.push(stage, Severity::Review, reason);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn needs_review(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Review)
    }

    /// Entries at or above `min`.
    pub fn at_least(&self, min: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.severity >= min)
    }
}

/// One item's line in the batch log.
#[derive(Debug, Clone)]
pub enum LogEntry {
    Enriched {
        /// Input key, which may differ from the payload id.
        id: i64,
        name: String,
        outcome: Outcome,
        diagnostics: Diagnostics,
    },
    Failed(ItemError),
}

/// Collects per-item results for a batch and writes the report.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<LogEntry>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogSummary {
    pub no_wiki_page: usize,
    pub no_infobox: usize,
    pub finalized: usize,
    pub with_bonuses: usize,
    pub bonuses_missing: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl LogSummary {
    pub fn total(&self) -> usize {
        self.no_wiki_page
            + self.no_infobox
            + self.finalized
            + self.with_bonuses
            + self.bonuses_missing
            + self.failed
    }
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Sort entries by item id so reports diff cleanly between runs.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    }

    pub fn summary(&self) -> LogSummary {
        let mut summary = LogSummary::default();
        for entry in &self.entries {
            match entry {
                LogEntry::Enriched {
                    outcome,
                    diagnostics,
                    ..
                } => {
                    summary.warnings += diagnostics.at_least(Severity::Warning).count();
                    match outcome {
                        Outcome::NoWikiPage => summary.no_wiki_page += 1,
                        Outcome::NoInfobox => summary.no_infobox += 1,
                        Outcome::Finalized => summary.finalized += 1,
                        Outcome::WithBonuses => summary.with_bonuses += 1,
                        Outcome::BonusesMissing => summary.bonuses_missing += 1,
                    }
                }
                LogEntry::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// Write the log to a file.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        use std::io::Write;

        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        let summary = self.summary();

        writeln!(file, "=== Item Enrichment Log ===")?;
        writeln!(
            file,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(file)?;
        writeln!(file, "--- Summary ---")?;
        writeln!(file, "Items: {}", summary.total())?;
        writeln!(file, "With bonuses: {}", summary.with_bonuses)?;
        writeln!(file, "Finalized (not equipable): {}", summary.finalized)?;
        writeln!(file, "Bonuses missing (review): {}", summary.bonuses_missing)?;
        writeln!(file, "No infobox: {}", summary.no_infobox)?;
        writeln!(file, "No wiki page: {}", summary.no_wiki_page)?;
        writeln!(file, "Failed: {}", summary.failed)?;
        writeln!(file, "Warnings: {}", summary.warnings)?;
        writeln!(file)?;
        writeln!(file, "--- Details ---")?;
        writeln!(file)?;

        for entry in &self.entries {
            match entry {
                LogEntry::Enriched {
                    id,
                    name,
                    outcome,
                    diagnostics,
                } => {
                    writeln!(file, "[{}] {} \"{}\"", outcome.label(), id, name)?;
                    for d in diagnostics.at_least(Severity::Warning) {
                        writeln!(file, "     {} {}: {}", d.severity, d.stage, d.reason)?;
                    }
                }
                LogEntry::Failed(err) => {
                    writeln!(file, "[FAILED] {} at {}: {}", err.id, err.stage, err.reason)?;
                }
            }
        }

        file.flush()
    }
}

fn sort_key(entry: &LogEntry) -> (i64, String) {
    match entry {
        LogEntry::Enriched { id, .. } => (*id, String::new()),
        LogEntry::Failed(err) => (err.id.parse().unwrap_or(i64::MAX), err.id.clone()),
    }
}

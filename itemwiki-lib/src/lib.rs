//! Item record enrichment engine.
//!
//! Fuses scraped item payloads with wiki infobox data into one normalized,
//! ordered JSON record per item. Corpora are loaded once and shared
//! read-only; items are enriched independently on a worker pool.

pub mod assemble;
pub mod batch;
pub mod corpus;
pub mod diagnostics;
pub mod enrich;
pub mod error;
pub mod output;
pub mod schema;
pub mod settings;
pub mod worker_pool;

pub use batch::{BatchReport, run_batch};
pub use corpus::{BuyLimits, Corpora, Corpus, ScrapedItems};
pub use diagnostics::{Diagnostic, DiagnosticLog, Diagnostics, LogEntry, LogSummary, Severity, Stage};
pub use enrich::{Enriched, Enricher, Outcome, UNKNOWN_BUY_LIMIT};
pub use error::{EngineError, ItemError};
pub use output::OutputWriter;
pub use schema::{ExamineFormat, SchemaProfile, SchemaVersion};
pub use settings::{EngineConfig, settings_path};
pub use worker_pool::WorkerPool;

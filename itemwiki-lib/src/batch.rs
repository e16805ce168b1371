//! Batch driver: enrich every scraped item and write the results.

use std::sync::Arc;

use crate::corpus::{Corpora, ScrapedItems};
use crate::diagnostics::{DiagnosticLog, LogEntry, Stage};
use crate::enrich::Enricher;
use crate::error::{EngineError, ItemError};
use crate::output::OutputWriter;
use crate::settings::EngineConfig;
use crate::worker_pool::WorkerPool;

/// Counts for one finished batch plus its full log.
#[derive(Debug)]
pub struct BatchReport {
    pub written: usize,
    pub review: usize,
    pub failed: usize,
    pub log: DiagnosticLog,
}

/// Enrich and write every item in `scraped`.
///
/// Per-item failures are logged and skipped. The diagnostics report is
/// written to the output directory once all items are done. `on_item` sees
/// each log entry as it arrives, in completion order.
pub async fn run_batch<F>(
    scraped: ScrapedItems,
    corpora: Arc<Corpora>,
    config: &EngineConfig,
    writer: &OutputWriter,
    mut on_item: F,
) -> Result<BatchReport, EngineError>
where
    F: FnMut(&LogEntry),
{
    config.validate()?;

    let mut report = BatchReport {
        written: 0,
        review: 0,
        failed: 0,
        log: DiagnosticLog::new(),
    };

    let (items, rejected) = scraped.into_parts();
    for key in rejected {
        let entry = LogEntry::Failed(ItemError::new(
            key,
            Stage::Scraped,
            "key is not an integer item id",
        ));
        on_item(&entry);
        report.failed += 1;
        report.log.add(entry);
    }

    log::info!(
        "Enriching {} items with {} workers",
        items.len(),
        config.workers
    );

    let enricher = Arc::new(Enricher::new(corpora, config));
    let mut pool = WorkerPool::start(config.workers, items, move |(id, payload)| {
        let enricher = enricher.clone();
        async move { enricher.enrich(id, &payload) }
    });

    while let Some(result) = pool.recv().await {
        let entry = match result {
            Ok(item) => match writer.write(&item) {
                Ok(path) => {
                    log::debug!("Wrote {}", path.display());
                    if item.needs_review() {
                        report.review += 1;
                    } else {
                        report.written += 1;
                    }
                    LogEntry::Enriched {
                        id: item.key,
                        name: item.record.name,
                        outcome: item.outcome,
                        diagnostics: item.diagnostics,
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    LogEntry::Failed(ItemError::new(item.key, Stage::Output, e.to_string()))
                }
            },
            Err(e) => {
                log::warn!("{}", e);
                report.failed += 1;
                LogEntry::Failed(e)
            }
        };
        on_item(&entry);
        report.log.add(entry);
    }

    report.log.sort();
    let log_path = writer.diagnostics_path();
    let io_err = |source| EngineError::Io {
        path: log_path.display().to_string(),
        source,
    };
    std::fs::create_dir_all(writer.root()).map_err(io_err)?;
    report.log.write_to_file(&log_path).map_err(io_err)?;
    log::info!("Diagnostics written to {}", log_path.display());

    Ok(report)
}

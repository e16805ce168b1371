use std::path::PathBuf;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemwiki_lib::{LogEntry, OutputWriter, run_batch};

use crate::cli_types::InputArgs;
use crate::error::CliError;

/// Enrich every scraped item and write the output tree.
pub(crate) fn run_build(
    inputs: &InputArgs,
    out: PathBuf,
    workers: Option<usize>,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = super::resolve_config(inputs, workers, pretty)?;
    let (scraped, corpora) = super::load_inputs(inputs)?;
    let writer = OutputWriter::new(out, config.schema.profile(), config.pretty);

    log::info!(
        "Building {} items into {} (schema: {}, workers: {})",
        scraped.len(),
        writer.root().display(),
        config.schema,
        config.workers,
    );

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new((scraped.len() + scraped.rejected().len()) as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| CliError::other(e.to_string()))?
                .progress_chars("=> "),
        );
        pb
    };

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let report = rt.block_on(run_batch(
        scraped,
        Arc::new(corpora),
        &config,
        &writer,
        |entry| {
            pb.inc(1);
            match entry {
                LogEntry::Enriched { name, .. } => pb.set_message(name.clone()),
                LogEntry::Failed(err) => pb.suspend(|| {
                    log::warn!(
                        "{} {}",
                        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                        err
                    )
                }),
            }
        },
    ))?;
    pb.finish_and_clear();

    let summary = report.log.summary();
    log::info!("");
    log::info!(
        "{} {} records written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.written,
        writer.root().display(),
    );
    log::info!(
        "  {} with bonuses, {} not equipable, {} without infobox, {} without wiki page",
        summary.with_bonuses,
        summary.finalized,
        summary.no_infobox,
        summary.no_wiki_page,
    );
    if report.review > 0 {
        log::info!(
            "{} {} records need review (written to {})",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.review,
            writer
                .root()
                .join(itemwiki_lib::output::REVIEW_DIR)
                .display(),
        );
    }
    if report.failed > 0 {
        log::info!(
            "{} {} items failed",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            report.failed,
        );
    }
    log::info!(
        "  Diagnostics: {}",
        writer
            .diagnostics_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}

use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemwiki_lib::{Enricher, Severity, assemble};

use crate::cli_types::InputArgs;
use crate::error::CliError;

/// Enrich one item and print its JSON and diagnostics. Nothing is written.
pub(crate) fn run_show(id: i64, inputs: &InputArgs) -> Result<(), CliError> {
    let config = super::resolve_config(inputs, None, true)?;
    let (scraped, corpora) = super::load_inputs(inputs)?;
    let payload = scraped
        .get(id)
        .ok_or_else(|| CliError::unknown_item(id.to_string()))?;

    let enricher = Enricher::new(Arc::new(corpora), &config);
    let item = enricher.enrich(id, payload).map_err(|e| CliError::other(e.to_string()))?;

    let json = assemble::to_json_string(&item.record, &config.schema.profile(), true)
        .map_err(|e| CliError::other(e.to_string()))?;
    println!("{}", json);

    log::info!("");
    log::info!(
        "{} {}",
        "Outcome:".if_supports_color(Stdout, |t| t.bold()),
        item.outcome.label(),
    );
    if item.needs_review() {
        log::info!(
            "{} equipable without bonuses; a build writes this record to review/",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    for d in item.diagnostics.entries() {
        let line = format!("  {:<6} {:<9} {}", d.severity, d.stage, d.reason);
        match d.severity {
            Severity::Info => log::info!("{}", line.if_supports_color(Stdout, |t| t.dimmed())),
            Severity::Warning => log::info!("{}", line.if_supports_color(Stdout, |t| t.yellow())),
            Severity::Review => log::info!("{}", line.if_supports_color(Stdout, |t| t.red())),
        }
    }

    Ok(())
}

pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod show;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemwiki_lib::{BuyLimits, Corpora, Corpus, EngineConfig, EngineError, ScrapedItems};

use crate::cli_types::InputArgs;
use crate::error::CliError;

/// Saved settings with command-line overrides applied on top.
pub(crate) fn resolve_config(
    inputs: &InputArgs,
    workers: Option<usize>,
    pretty: bool,
) -> Result<EngineConfig, CliError> {
    let mut config = EngineConfig::load()?;
    apply_overrides(&mut config, inputs, workers, pretty);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(
    config: &mut EngineConfig,
    inputs: &InputArgs,
    workers: Option<usize>,
    pretty: bool,
) {
    if let Some(schema) = inputs.schema {
        config.schema = schema;
    }
    if let Some(url) = &inputs.wiki_base_url {
        config.wiki_base_url = url.clone();
    }
    if let Some(n) = workers {
        config.workers = n;
    }
    config.pretty |= pretty;
}

/// Load every input. Only the scraped items are required to load; a
/// corpus that cannot be read is reported and treated as empty.
pub(crate) fn load_inputs(inputs: &InputArgs) -> Result<(ScrapedItems, Corpora), CliError> {
    let scraped = ScrapedItems::load(&inputs.items)?;
    log::info!(
        "{} Loaded {} scraped items from {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        scraped.len(),
        inputs.items.display(),
    );

    let items =
        load_optional(Some(inputs.wiki.as_path()), "wiki", Corpus::load).unwrap_or_default();
    let bonuses =
        load_optional(inputs.bonuses.as_deref(), "bonuses", Corpus::load).unwrap_or_default();
    let buy_limits = load_optional(inputs.buy_limits.as_deref(), "buy-limit", BuyLimits::load)
        .unwrap_or_default();

    Ok((
        scraped,
        Corpora {
            items,
            bonuses,
            buy_limits,
        },
    ))
}

fn load_optional<T>(
    path: Option<&Path>,
    what: &str,
    load: impl FnOnce(&Path) -> Result<T, EngineError>,
) -> Option<T> {
    let path = path?;
    match load(path) {
        Ok(loaded) => {
            log::info!(
                "{} Loaded {} input {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                what,
                path.display(),
            );
            Some(loaded)
        }
        Err(e) => {
            log::warn!(
                "{} Ignoring {} input: {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                what,
                e,
            );
            None
        }
    }
}

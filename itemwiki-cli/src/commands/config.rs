use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use itemwiki_lib::{EngineConfig, settings_path};

use crate::error::CliError;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let config = EngineConfig::load()?;

    log::info!(
        "{}",
        "itemwiki Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let fields: [(&str, String); 4] = [
        ("schema", config.schema.to_string()),
        ("wiki_base_url", config.wiki_base_url.clone()),
        ("workers", config.workers.to_string()),
        ("pretty", config.pretty.to_string()),
    ];
    for (name, value) in &fields {
        log::info!("  {:<14} {}", name, value);
    }

    if let Err(e) = config.validate() {
        log::warn!(
            "{} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            e
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}

/// Write the default settings to the settings file.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = settings_path();
    init_settings(&path, force)?;
    log::info!(
        "{} Wrote default settings to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn init_settings(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    EngineConfig::default().save_to(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemwiki_lib::SchemaVersion;

    #[test]
    fn init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itemwiki").join("settings.toml");
        init_settings(&path, false).unwrap();
        assert_eq!(EngineConfig::load_from(&path).unwrap(), EngineConfig::default());
    }

    #[test]
    fn init_keeps_existing_file_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let custom = EngineConfig {
            schema: SchemaVersion::Legacy,
            ..EngineConfig::default()
        };
        custom.save_to(&path).unwrap();

        assert!(init_settings(&path, false).is_err());
        assert_eq!(EngineConfig::load_from(&path).unwrap(), custom);

        init_settings(&path, true).unwrap();
        assert_eq!(EngineConfig::load_from(&path).unwrap(), EngineConfig::default());
    }
}

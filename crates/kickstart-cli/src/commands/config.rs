//! `kickstart config`: show the effective configuration.

use serde::Serialize;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct KeyValue<'a> {
    key: &'a str,
    value: String,
}

#[derive(Serialize)]
struct ConfigLocation {
    path: String,
    exists: bool,
}

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            if output.is_json() {
                return output.json(&KeyValue { key: &key, value });
            }
            // bare value so `$(kickstart config get ...)` works in scripts
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::Serialization {
                message: format!("Cannot render configuration as TOML: {e}"),
            })?;
            output.header("Effective configuration (defaults < file < KICKSTART_* env):")?;
            output.print(rendered.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            let location = ConfigLocation {
                exists: path.is_file(),
                path: path.display().to_string(),
            };
            if output.is_json() {
                return output.json(&location);
            }
            output.print(&location.path)?;
            if !location.exists {
                output.info("No file there yet; run `kickstart config-init` to create one.")?;
            }
        }
    }

    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known: {})",
            AppConfig::KEYS.join(", ")
        ),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(lookup(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn checker_defaults_to_python3() {
        assert_eq!(lookup(&AppConfig::default(), "checker.python").unwrap(), "python3");
    }

    #[test]
    fn unknown_key_names_the_known_ones() {
        let err = lookup(&AppConfig::default(), "defaults.lang").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(err.to_string().contains("checker.python"));
    }

    #[test]
    fn unset_override_dir_is_empty() {
        assert_eq!(lookup(&AppConfig::default(), "templates.override_dir").unwrap(), "");
    }
}

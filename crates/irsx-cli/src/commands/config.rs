//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use irsx_core::IrsxConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one configuration value
    Get {
        /// Dotted key (e.g., "batch.progress_interval")
        key: String,
    },

    /// Change one configuration value
    Set {
        /// Dotted key
        key: String,
        /// New value, parsed as JSON when possible
        value: String,
    },

    /// Show configuration file path
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            let config = read_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            write(&path, &IrsxConfig::default())?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(read_or_default(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let config = assign(&read_or_default(&path)?, &key, &value)?;
            write(&path, &config)?;
            println!("{} Set {} = {}", style("✓").green(), key, value);
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", path.display());
            if path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'irsx config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("irsx")
        .join("config.json")
}

fn read_or_default(path: &std::path::Path) -> anyhow::Result<IrsxConfig> {
    if path.exists() {
        Ok(IrsxConfig::from_file(path)?)
    } else {
        Ok(IrsxConfig::default())
    }
}

fn write(path: &std::path::Path, config: &IrsxConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn lookup<'v>(json: &'v Value, key: &str) -> anyhow::Result<&'v Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

/// Return a copy of `config` with `key` replaced. Unknown keys and values of
/// the wrong type are rejected.
fn assign(config: &IrsxConfig, key: &str, raw: &str) -> anyhow::Result<IrsxConfig> {
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(config)?;
    let slot = key.split('.').try_fold(&mut json, |current, part| {
        current
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })?;
    *slot = value;

    serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use irsx_core::OutputFormat;

    #[test]
    fn test_lookup_nested_key() {
        let json = serde_json::to_value(IrsxConfig::default()).unwrap();
        assert_eq!(lookup(&json, "batch.progress_interval").unwrap(), &Value::from(100));
        assert!(lookup(&json, "batch.missing").is_err());
    }

    #[test]
    fn test_assign_parses_json_and_strings() {
        let config = IrsxConfig::default();

        let updated = assign(&config, "batch.progress_interval", "25").unwrap();
        assert_eq!(updated.batch.progress_interval, 25);

        let updated = assign(&config, "output.format", "csv").unwrap();
        assert_eq!(updated.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_assign_rejects_unknown_key_and_bad_type() {
        let config = IrsxConfig::default();
        assert!(assign(&config, "output.colour", "true").is_err());
        assert!(assign(&config, "output.pretty", "sometimes").is_err());
    }
}

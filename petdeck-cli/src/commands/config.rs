//! Config command - manage dashboard settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use petdeck_store::{Settings, SettingsStore, default_config_dir, default_data_dir, default_settings_path};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Change one setting.
    ///
    /// Keys: animal, selected_breed (breed), image_count (count),
    /// gallery_type (gallery), auto_refresh, refresh_interval.
    Set {
        /// Setting key.
        key: String,
        /// New value. Numbers are clamped into range.
        value: String,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Set { key, value } => set_value(key, value, cli).await,
        ConfigAction::Reset => reset_config(cli).await,
    }
}

fn print_settings(settings: &Settings, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_settings(settings));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(settings)?);
        }
    }
    Ok(())
}

async fn show_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    print_settings(&store.get().await, cli)
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let data_dir = default_data_dir();
    let settings_path = default_settings_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
            println!("Data dir:      {}", data_dir.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
                "data_dir": data_dir.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn set_value(key: &str, value: &str, cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    store.set_value(key, value).await?;
    store.save().await?;

    info!(key, value, "Setting updated");
    print_settings(&store.get().await, cli)
}

async fn reset_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    store.reset().await;
    store.save().await?;

    info!(path = %store.path().display(), "Settings reset");
    match cli.format {
        OutputFormat::Text => println!("Configuration reset to defaults"),
        OutputFormat::Json => print_settings(&store.get().await, cli)?,
    }

    Ok(())
}

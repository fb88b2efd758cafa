//! CLI command implementations.

pub mod breeds;
pub mod config;
pub mod facts;
pub mod favorites;
pub mod images;
pub mod watch;

use anyhow::Result;
use petdeck_core::Animal;
use petdeck_store::{Settings, SettingsStore};

use crate::Cli;

/// Returns the animal from `--animal`, or the saved one.
pub(crate) fn resolve_animal(cli: &Cli, settings: &Settings) -> Animal {
    cli.animal.unwrap_or(settings.animal)
}

/// What runs when no subcommand is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DefaultCommand {
    /// One batch of images.
    Images,
    /// The auto-refresh loop.
    Watch,
}

impl DefaultCommand {
    /// Auto-refresh turns the default into watch mode.
    pub(crate) fn for_settings(settings: &Settings) -> Self {
        if settings.auto_refresh { Self::Watch } else { Self::Images }
    }
}

/// Runs the default command for the saved settings.
pub async fn run_default(cli: &Cli) -> Result<()> {
    let settings = SettingsStore::load_default().await?.get().await;
    match DefaultCommand::for_settings(&settings) {
        DefaultCommand::Images => images::run(&images::ImagesArgs::default(), cli).await,
        DefaultCommand::Watch => watch::run(&watch::WatchArgs::default(), cli).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_follows_auto_refresh() {
        assert_eq!(DefaultCommand::for_settings(&Settings::default()), DefaultCommand::Images);

        let settings = Settings {
            auto_refresh: true,
            ..Settings::default()
        };
        assert_eq!(DefaultCommand::for_settings(&settings), DefaultCommand::Watch);
    }
}

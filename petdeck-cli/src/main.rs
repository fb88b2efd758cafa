// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! PetDeck CLI - cat and dog images and facts from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Images for the saved animal (watch mode if auto-refresh is on)
//! petdeck
//!
//! # Dog breeds
//! petdeck --animal dog breeds
//!
//! # Beagle gallery
//! petdeck --animal dog images --breed beagle --count 10
//!
//! # Facts as JSON
//! petdeck facts --format json --pretty
//!
//! # Favorites
//! petdeck favorites add https://images.dog.ceo/breeds/beagle/n02088364_1.jpg --breed beagle
//! petdeck favorites list
//!
//! # Auto-refresh
//! petdeck watch --interval 30
//! ```

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use petdeck_core::{Animal, CoreError};
use petdeck_store::StoreError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{breeds, config, facts, favorites, images, watch};
use output::TextFormatter;

// ============================================================================
// CLI Definition
// ============================================================================

/// PetDeck CLI - cat and dog images and facts.
#[derive(Parser)]
#[command(name = "petdeck")]
#[command(about = "Cat and dog images, breeds and facts")]
#[command(long_about = r#"
PetDeck fetches random cat and dog images, breed lists and facts from
public APIs, falling back to built-in content when they are unreachable.

Supported animals:
  • Cats (cat) - TheCatAPI, CATAAS, random.cat, catfact.ninja
  • Dogs (dog) - dog.ceo, dog-api.kinduff.com

Examples:
  petdeck                          # Images, or watch if auto-refresh is on
  petdeck --animal dog breeds      # Dog breeds
  petdeck facts --count 3          # Three facts
  petdeck favorites list           # Saved favorites
  petdeck config set count 10      # Change a setting
"#)]
#[command(version)]
#[command(author = "PetDeck Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'images', or 'watch' when
    /// auto-refresh is enabled.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Animal to show (cat or dog). Defaults to the saved setting.
    #[arg(long, short, global = true)]
    pub animal: Option<Animal>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List breeds.
    #[command(visible_alias = "b")]
    Breeds,

    /// Fetch a batch of images.
    #[command(visible_alias = "i")]
    Images(images::ImagesArgs),

    /// Fetch facts.
    Facts(facts::FactsArgs),

    /// Manage favorite images.
    #[command(visible_alias = "fav")]
    Favorites(favorites::FavoritesArgs),

    /// Refresh images and facts on a timer.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Unknown animal, setting or value.
    InvalidArgument = 2,
}

impl ExitCode {
    /// Picks the exit code for a failed command.
    fn for_error(error: &anyhow::Error) -> Self {
        let invalid = error.chain().any(|cause| {
            cause.downcast_ref::<CoreError>().is_some()
                || matches!(
                    cause.downcast_ref::<StoreError>(),
                    Some(StoreError::UnknownSetting(_) | StoreError::InvalidSetting { .. })
                )
        });

        if invalid { Self::InvalidArgument } else { Self::Error }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("petdeck=debug,info")
    } else {
        EnvFilter::new("petdeck=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Breeds) => breeds::run(&cli).await,
        Some(Commands::Images(args)) => images::run(args, &cli).await,
        Some(Commands::Facts(args)) => facts::run(args, &cli).await,
        Some(Commands::Favorites(args)) => favorites::run(args, &cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        Some(Commands::Config(args)) => config::run(args, &cli).await,
        None => {
            // Images, or watch mode when auto-refresh is on
            commands::run_default(&cli).await
        }
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !cli.quiet {
                eprintln!("{}", TextFormatter::new(!cli.no_color).format_error(&format!("{:#}", e)));
            }
            ExitCode::for_error(&e)
        }
    };

    std::process::exit(code as i32);
}

#[cfg(test)]
fn exit_code_of(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => ExitCode::for_error(&e),
    }
}

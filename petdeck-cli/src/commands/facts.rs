//! Facts command - fetch facts with fallback.

use anyhow::Result;
use clap::Args;
use petdeck_providers::AnimalApi;
use petdeck_store::SettingsStore;

use super::resolve_animal;
use crate::output::{FactsOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Largest facts batch. Each fact is its own request.
pub const MAX_FACT_COUNT: usize = 20;

/// Arguments for the facts command.
#[derive(Args)]
pub struct FactsArgs {
    /// Number of facts (1-20).
    #[arg(long, short, default_value = "5")]
    pub count: usize,
}

impl FactsArgs {
    /// Returns the requested count clamped to 1..=[`MAX_FACT_COUNT`].
    pub fn clamped_count(&self) -> usize {
        self.count.clamp(1, MAX_FACT_COUNT)
    }
}

/// Runs the facts command.
///
/// Provider failures are reported alongside the built-in facts rather than
/// failing the command.
pub async fn run(args: &FactsArgs, cli: &Cli) -> Result<()> {
    let settings = SettingsStore::load_default().await?.get().await;
    let animal = resolve_animal(cli, &settings);

    let api = AnimalApi::new();
    let outcome = api.facts_or_fallback(animal, args.clamped_count()).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_facts(animal, &outcome));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&FactsOutput::new(animal, &outcome))?);
        }
    }

    Ok(())
}

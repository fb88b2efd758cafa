//! Breeds command - list breeds for an animal.

use anyhow::Result;
use petdeck_providers::AnimalApi;
use petdeck_store::SettingsStore;

use super::resolve_animal;
use crate::output::{BreedsOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the breeds command.
///
/// Never fails on provider errors; the built-in list is shown instead.
pub async fn run(cli: &Cli) -> Result<()> {
    let settings = SettingsStore::load_default().await?.get().await;
    let animal = resolve_animal(cli, &settings);

    let api = AnimalApi::new();
    let breeds = api.fetch_breeds(animal).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_breeds(animal, &breeds));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = BreedsOutput { animal, breeds: &breeds };
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

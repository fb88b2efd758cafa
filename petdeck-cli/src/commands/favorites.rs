//! Favorites command - manage favorite images.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use petdeck_core::{FavoriteCandidate, has_image_extension, is_valid_image_url};
use petdeck_store::{FavoritesStore, SettingsStore};
use tracing::info;

use super::resolve_animal;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

/// Favorites subcommands.
#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorites, filtered by `--animal` when given.
    List,

    /// Add an image to the favorites.
    Add {
        /// Image URL.
        url: String,

        /// Breed shown in the image.
        #[arg(long, short)]
        breed: Option<String>,
    },

    /// Remove a favorite by id.
    Remove {
        /// Favorite id, as shown by `favorites list`.
        id: String,
    },

    /// Remove every favorite.
    Clear,

    /// Show the number of favorites.
    Count,
}

/// Runs the favorites command.
pub async fn run(args: &FavoritesArgs, cli: &Cli) -> Result<()> {
    let store = FavoritesStore::open_default();

    match &args.action {
        FavoritesAction::List => list(&store, cli).await,
        FavoritesAction::Add { url, breed } => add(&store, url, breed.as_deref(), cli).await,
        FavoritesAction::Remove { id } => remove(&store, id, cli).await,
        FavoritesAction::Clear => clear(&store, cli).await,
        FavoritesAction::Count => count(&store, cli).await,
    }
}

async fn list(store: &FavoritesStore, cli: &Cli) -> Result<()> {
    let records = match cli.animal {
        Some(animal) => store.list_by_animal(animal).await?,
        None => store.list().await?,
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_favorites(&records));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&records)?);
        }
    }

    Ok(())
}

async fn add(store: &FavoritesStore, url: &str, breed: Option<&str>, cli: &Cli) -> Result<()> {
    if !is_valid_image_url(url) {
        anyhow::bail!("Not an absolute http(s) URL: {}", url);
    }
    if !has_image_extension(url) && !cli.quiet {
        eprintln!("Warning: {} does not look like an image URL", url);
    }

    let settings = SettingsStore::load_default().await?.get().await;
    let animal = resolve_animal(cli, &settings);

    let mut candidate = FavoriteCandidate::new(url, animal);
    if let Some(breed) = breed {
        candidate = candidate.with_breed(breed);
    }

    let already = store.is_favorite(url).await?;
    let records = store.add(candidate).await.context("Failed to add favorite")?;
    info!(count = records.len(), "Favorites updated");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            if already {
                println!("Already a favorite: {}", url);
            } else {
                println!("{}", formatter.format_success(&format!("Added to favorites ({} total)", records.len())));
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&records)?);
        }
    }

    Ok(())
}

async fn remove(store: &FavoritesStore, id: &str, cli: &Cli) -> Result<()> {
    let before = store.count().await?;
    let records = store.remove(id).await.context("Failed to remove favorite")?;

    match cli.format {
        OutputFormat::Text => {
            if records.len() < before {
                let formatter = TextFormatter::new(!cli.no_color);
                println!("{}", formatter.format_success(&format!("Removed {}", id)));
            } else {
                println!("No favorite with id {}", id);
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&records)?);
        }
    }

    Ok(())
}

async fn clear(store: &FavoritesStore, cli: &Cli) -> Result<()> {
    store.clear().await.context("Failed to clear favorites")?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_success("Favorites cleared"));
        }
        OutputFormat::Json => println!("[]"),
    }

    Ok(())
}

async fn count(store: &FavoritesStore, cli: &Cli) -> Result<()> {
    let count = store.count().await?;

    match cli.format {
        OutputFormat::Text => println!("{}", count),
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&serde_json::json!({ "count": count }))?);
        }
    }

    Ok(())
}

//! Images command - fetch a batch of image URLs.

use anyhow::Result;
use clap::Args;
use petdeck_core::{Animal, GalleryType};
use petdeck_providers::AnimalApi;
use petdeck_store::{Settings, SettingsStore, clamp_image_count};
use tracing::debug;

use super::resolve_animal;
use crate::output::{ImagesOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the images command.
#[derive(Args, Default)]
pub struct ImagesArgs {
    /// Number of images (1-20). Defaults to the saved setting.
    #[arg(long, short)]
    pub count: Option<u32>,

    /// Breed filter. Implies `--gallery breed` unless a gallery is given.
    #[arg(long, short)]
    pub breed: Option<String>,

    /// Gallery type (random or breed).
    #[arg(long, short)]
    pub gallery: Option<GalleryType>,
}

/// A fully resolved image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageRequest {
    pub animal: Animal,
    pub count: u32,
    pub breed: Option<String>,
    pub gallery: GalleryType,
}

impl ImageRequest {
    /// Merges command-line arguments over saved settings.
    ///
    /// The saved breed is only used when it belongs to the requested animal.
    pub(crate) fn resolve(args: &ImagesArgs, animal: Animal, settings: &Settings) -> Self {
        let saved_breed = (animal == settings.animal)
            .then(|| settings.selected_breed.clone())
            .flatten();

        let gallery = match (args.gallery, &args.breed) {
            (Some(gallery), _) => gallery,
            (None, Some(_)) => GalleryType::Breed,
            (None, None) => settings.gallery_type,
        };

        Self {
            animal,
            count: clamp_image_count(args.count.unwrap_or(settings.image_count)),
            breed: args.breed.clone().or(saved_breed),
            gallery,
        }
    }
}

/// Runs the images command.
pub async fn run(args: &ImagesArgs, cli: &Cli) -> Result<()> {
    let settings = SettingsStore::load_default().await?.get().await;
    let request = ImageRequest::resolve(args, resolve_animal(cli, &settings), &settings);
    debug!(?request, "Fetching images");

    let api = AnimalApi::new();
    let images = api
        .fetch_images(request.animal, request.count as usize, request.breed.as_deref(), request.gallery)
        .await
        .map_err(|e| anyhow::anyhow!("{}. Please try again.", e.user_message().trim_end_matches('.')))?;

    let breed = request.gallery.breed_filter(request.breed.as_deref());

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_images(request.animal, breed, &images));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = ImagesOutput {
                animal: request.animal,
                gallery_type: request.gallery,
                breed,
                images: &images,
            };
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

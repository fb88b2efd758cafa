//! Watch command - refresh images and facts on a timer.
//!
//! The first refresh starts immediately, then one per interval. A tick that
//! arrives while the previous refresh is still outstanding is skipped, so at
//! most one refresh is in flight. Each refresh takes a generation ticket and
//! its frame is rendered only while that ticket is the latest.

use anyhow::Result;
use chrono::Local;
use clap::Args;
use petdeck_core::ImageResult;
use petdeck_fetch::{GenerationTicket, RequestGeneration};
use petdeck_providers::{AnimalApi, FactsOutcome};
use petdeck_store::{SettingsStore, clamp_refresh_interval};
use std::future::Future;
use std::io::{Write, stdout};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use super::images::{ImageRequest, ImagesArgs};
use super::resolve_animal;
use crate::output::{FactsOutput, JsonFormatter, TextFormatter, WatchFrameOutput};
use crate::{Cli, OutputFormat};

/// Facts fetched per refresh.
const FACTS_PER_FRAME: usize = 3;

/// Arguments for watch command.
#[derive(Args, Default)]
pub struct WatchArgs {
    /// Refresh interval in seconds (10-300). Defaults to the saved setting.
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Number of images per refresh. Defaults to the saved setting.
    #[arg(long, short)]
    pub count: Option<u32>,
}

/// The result of one refresh.
struct Frame {
    images: Result<Vec<ImageResult>, String>,
    facts: FactsOutcome,
}

impl Frame {
    async fn fetch(api: &AnimalApi, request: &ImageRequest) -> Self {
        let images = api.fetch_images(
            request.animal,
            request.count as usize,
            request.breed.as_deref(),
            request.gallery,
        );
        let facts = api.facts_or_fallback(request.animal, FACTS_PER_FRAME);
        let (images, facts) = tokio::join!(images, facts);

        Self {
            images: images.map_err(|e| e.user_message()),
            facts,
        }
    }
}

// ============================================================================
// Refresh Loop
// ============================================================================

/// Counters reported when the loop stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoopStats {
    pub started: u64,
    pub rendered: u64,
    pub skipped: u64,
    pub dropped: u64,
}

/// A refresh that has been spawned but whose frame has not been handled.
struct InFlight {
    ticket: GenerationTicket,
    handle: JoinHandle<()>,
}

/// Drives `refresh` every `period` until `shutdown` resolves.
///
/// Frames are handed to `render` together with their ticket. Any refresh
/// still running at shutdown is aborted.
pub(crate) async fn refresh_loop<T, F, Fut, R, S>(
    period: Duration,
    mut refresh: F,
    mut render: R,
    shutdown: S,
) -> Result<LoopStats>
where
    T: Send + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    R: FnMut(GenerationTicket, T) -> Result<()>,
    S: Future<Output = Result<()>>,
{
    let generation = RequestGeneration::new();
    let (tx, mut rx) = mpsc::channel::<(GenerationTicket, T)>(1);
    let mut in_flight: Option<InFlight> = None;
    let mut stats = LoopStats::default();

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(current) = &in_flight {
                    if !current.handle.is_finished() {
                        debug!(generation = current.ticket.value(), "Previous refresh still running, skipping tick");
                        stats.skipped += 1;
                        continue;
                    }
                    // Finished without its frame being handled yet: either
                    // the frame is queued or the task died.
                    match rx.try_recv() {
                        Ok((ticket, frame)) => {
                            deliver(&generation, ticket, frame, &mut render, &mut stats)?;
                        }
                        Err(_) => warn!(generation = current.ticket.value(), "Refresh ended without a result"),
                    }
                    in_flight = None;
                }

                let ticket = generation.issue();
                debug!(generation = ticket.value(), "Refresh started");
                stats.started += 1;

                let work = refresh();
                let tx = tx.clone();
                let handle = tokio::spawn(async move {
                    let frame = work.await;
                    // The receiver only goes away when the loop exits.
                    let _ = tx.send((ticket, frame)).await;
                });
                in_flight = Some(InFlight { ticket, handle });
            }
            Some((ticket, frame)) = rx.recv() => {
                if in_flight.as_ref().is_some_and(|current| current.ticket == ticket) {
                    in_flight = None;
                }
                deliver(&generation, ticket, frame, &mut render, &mut stats)?;
            }
            result = &mut shutdown => {
                result?;
                break;
            }
        }
    }

    if let Some(current) = in_flight {
        current.handle.abort();
    }
    Ok(stats)
}

fn deliver<T, R>(
    generation: &RequestGeneration,
    ticket: GenerationTicket,
    frame: T,
    render: &mut R,
    stats: &mut LoopStats,
) -> Result<()>
where
    R: FnMut(GenerationTicket, T) -> Result<()>,
{
    match generation.accept(ticket, frame) {
        Some(frame) => {
            stats.rendered += 1;
            render(ticket, frame)
        }
        None => {
            debug!(generation = ticket.value(), "Dropping stale refresh");
            stats.dropped += 1;
            Ok(())
        }
    }
}

// ============================================================================
// Command
// ============================================================================

/// Runs the watch command until Ctrl+C.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let settings = SettingsStore::load_default().await?.get().await;
    let refresh_interval = clamp_refresh_interval(args.interval.unwrap_or(settings.refresh_interval_secs));

    let images_args = ImagesArgs {
        count: args.count,
        ..ImagesArgs::default()
    };
    let request = Arc::new(ImageRequest::resolve(&images_args, resolve_animal(cli, &settings), &settings));

    info!(interval = refresh_interval, animal = %request.animal, "Starting watch mode");

    let api = Arc::new(AnimalApi::new());
    let refresh = {
        let request = Arc::clone(&request);
        move || {
            let api = Arc::clone(&api);
            let request = Arc::clone(&request);
            async move { Frame::fetch(&api, &request).await }
        }
    };
    let shutdown = async { tokio::signal::ctrl_c().await.map_err(anyhow::Error::from) };

    let stats = refresh_loop(
        Duration::from_secs(refresh_interval),
        refresh,
        |ticket, frame| render(&frame, ticket, &request, refresh_interval, cli),
        shutdown,
    )
    .await?;

    info!(?stats, "Watch mode stopped");
    Ok(())
}

fn render(frame: &Frame, ticket: GenerationTicket, request: &ImageRequest, refresh_interval: u64, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            // Clear screen
            print!("\x1b[2J\x1b[H");
            stdout().flush()?;

            println!("{}", formatter.format_watch_header(request.animal, refresh_interval, Local::now()));
            println!();

            match &frame.images {
                Ok(images) => {
                    let breed = request.gallery.breed_filter(request.breed.as_deref());
                    println!("{}", formatter.format_images(request.animal, breed, images));
                }
                Err(message) => println!(
                    "{}",
                    formatter.format_error(&format!("{}. Retrying next refresh.", message.trim_end_matches('.')))
                ),
            }
            println!();
            println!("{}", formatter.format_facts(request.animal, &frame.facts));
            println!();
            println!("Press Ctrl+C to exit");
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = WatchFrameOutput {
                generation: ticket.value(),
                refreshed_at: Local::now().to_rfc3339(),
                images: frame.images.as_deref().unwrap_or_default(),
                images_error: frame.images.as_ref().err().map(String::as_str),
                facts: FactsOutput::new(request.animal, &frame.facts),
            };
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

//! Text output formatting with colors.

use chrono::{DateTime, Local, Utc};
use petdeck_core::{Animal, FactCategory, FavoriteRecord, ImageResult, display_breed};
use petdeck_providers::FactsOutcome;
use petdeck_store::Settings;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Width of the category column in the facts table.
const CATEGORY_WIDTH: usize = 12;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a breed list, one display-cased breed per line.
    pub fn format_breeds(&self, animal: Animal, breeds: &[String]) -> String {
        let mut lines = Vec::with_capacity(breeds.len() + 2);
        lines.push(self.bold(&format!("{} breeds ({})", animal.display_name(), breeds.len())));
        lines.push("─".repeat(40));
        lines.extend(breeds.iter().map(|b| format!("  • {}", display_breed(b))));
        lines.join("\n")
    }

    /// Formats an image batch as numbered URLs.
    pub fn format_images(&self, animal: Animal, breed: Option<&str>, images: &[ImageResult]) -> String {
        let title = match breed {
            Some(breed) => format!("{} images: {}", animal.display_name(), display_breed(breed)),
            None => format!("{} images", animal.display_name()),
        };

        let mut lines = vec![self.bold(&title)];
        for (i, image) in images.iter().enumerate() {
            lines.push(format!("{:>3}. {}", i + 1, self.cyan(image.as_str())));
        }
        lines.join("\n")
    }

    /// Formats a facts table with a category column.
    ///
    /// When the facts are a fallback the provider error is shown above them.
    pub fn format_facts(&self, animal: Animal, outcome: &FactsOutcome) -> String {
        let mut lines = Vec::new();

        if let Some(error) = &outcome.error {
            lines.push(self.format_error(error));
            lines.push(self.dim("Showing saved facts instead."));
            lines.push(String::new());
        }

        lines.push(self.bold(&format!("{} facts", animal.display_name())));
        lines.push(format!("{:<4} {:<width$} {}", "#", "Category", "Fact", width = CATEGORY_WIDTH));
        lines.push("─".repeat(70));

        for (i, fact) in outcome.facts.iter().enumerate() {
            let category = FactCategory::classify(fact);
            lines.push(format!(
                "{:<4} {} {}",
                i + 1,
                self.yellow(&format!("{:<width$}", category.label(), width = CATEGORY_WIDTH)),
                fact
            ));
        }

        lines.join("\n")
    }

    /// Formats the favorites collection.
    pub fn format_favorites(&self, records: &[FavoriteRecord]) -> String {
        if records.is_empty() {
            return self.dim("No favorites yet.");
        }

        let mut lines = vec![self.bold(&format!("Favorites ({})", records.len()))];
        for record in records {
            lines.push(format!(
                "{}  {:<4} {:<20} {}",
                self.dim(&record.id),
                record.animal.tag(),
                display_breed(&record.breed),
                self.cyan(&record.url)
            ));
            lines.push(format!("{:>15}added {}", "", self.format_timestamp(record.added_at)));
        }
        lines.join("\n")
    }

    /// Formats dashboard settings.
    pub fn format_settings(&self, settings: &Settings) -> String {
        let breed = settings.selected_breed.as_deref().map_or_else(|| "−".to_string(), display_breed);
        let auto = if settings.auto_refresh {
            self.green("on")
        } else {
            self.dim("off")
        };

        [
            self.bold("PetDeck Configuration"),
            "─".repeat(40),
            format!("Animal:           {}", settings.animal.display_name()),
            format!("Selected breed:   {}", breed),
            format!("Image count:      {}", settings.image_count),
            format!("Gallery type:     {}", settings.gallery_type),
            format!("Auto-refresh:     {}", auto),
            format!("Refresh interval: {}s", settings.refresh_interval_secs),
        ]
        .join("\n")
    }

    /// Formats the watch mode header.
    pub fn format_watch_header(&self, animal: Animal, interval_secs: u64, at: DateTime<Local>) -> String {
        format!(
            "{}\n{}",
            self.bold(&format!(
                "PetDeck Watch - {} - {} (refresh: {}s)",
                animal.display_name(),
                at.format("%H:%M:%S"),
                interval_secs
            )),
            "─".repeat(50)
        )
    }

    /// Formats a success line.
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.green("✓"), message)
    }

    /// Formats an error message.
    pub fn format_error(&self, error: &str) -> String {
        format!("{}: {}", self.red("Error"), error)
    }

    fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

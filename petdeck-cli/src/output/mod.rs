//! Output formatting for CLI.

mod json;
mod text;

pub use json::{BreedsOutput, FactsOutput, ImagesOutput, JsonFormatter, WatchFrameOutput};
pub use text::TextFormatter;

//! Dog provider response parsers.

use petdeck_core::{BreedName, FactEntry};
use petdeck_fetch::FetchError;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BreedListResponse {
    message: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ImageListResponse {
    message: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FactsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    facts: Vec<String>,
}

/// Parses dog.ceo `GET /api/breeds/list/all` into top-level breed names.
///
/// Sub-breeds are dropped; names come back sorted.
pub fn parse_breeds(json_str: &str) -> Result<Vec<BreedName>, FetchError> {
    debug!(len = json_str.len(), "Parsing dog breeds response");

    let response: BreedListResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid breeds JSON: {}", e)))?;

    Ok(response.message.into_keys().collect())
}

/// Parses a dog.ceo image list.
///
/// An empty list is returned as-is; the adapter decides what an empty
/// batch means for the requested breed. Error payloads, where `message`
/// is a string, do not match and become [`FetchError::InvalidResponse`].
pub fn parse_images(json_str: &str) -> Result<Vec<String>, FetchError> {
    let response: ImageListResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid images JSON: {}", e)))?;
    Ok(response.message)
}

/// Parses a kinduff `GET /api/facts?number=1` body.
///
/// Returns `Ok(None)` for a well-formed body that reports no success or
/// carries no facts, so the caller can substitute a fallback.
pub fn parse_fact(json_str: &str) -> Result<Option<FactEntry>, FetchError> {
    let response: FactsResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid facts JSON: {}", e)))?;

    if !response.success {
        return Ok(None);
    }
    Ok(response.facts.into_iter().next())
}

//! Cat provider response parsers.
//!
//! Each parser takes the raw body and either extracts the normalized value
//! or returns [`FetchError::InvalidResponse`]. Nothing partially parsed
//! leaks out.

use petdeck_core::{BreedName, FactEntry};
use petdeck_fetch::FetchError;
use serde::Deserialize;
use tracing::debug;

/// Origin used to absolutize relative cataas paths.
pub const CATAAS_ORIGIN: &str = "https://cataas.com";

// ============================================================================
// catfact.ninja
// ============================================================================

#[derive(Debug, Deserialize)]
struct BreedsPage {
    data: Vec<BreedEntry>,
}

#[derive(Debug, Deserialize)]
struct BreedEntry {
    breed: String,
}

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// Parses `GET /breeds` into breed names, in provider order.
pub fn parse_breeds(json_str: &str) -> Result<Vec<BreedName>, FetchError> {
    debug!(len = json_str.len(), "Parsing cat breeds response");

    let page: BreedsPage = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid breeds JSON: {}", e)))?;

    Ok(page.data.into_iter().map(|entry| entry.breed).collect())
}

/// Parses `GET /fact` into a single fact.
pub fn parse_fact(json_str: &str) -> Result<FactEntry, FetchError> {
    let response: FactResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid fact JSON: {}", e)))?;
    Ok(response.fact)
}

// ============================================================================
// Image Sources
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchHit {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CataasResponse {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeowResponse {
    file: Option<String>,
}

/// Parses thecatapi `GET /v1/images/search`, taking the first hit.
pub fn parse_thecatapi(json_str: &str) -> Result<String, FetchError> {
    let hits: Vec<SearchHit> = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid search JSON: {}", e)))?;

    hits.into_iter()
        .next()
        .and_then(|hit| hit.url)
        .ok_or_else(|| FetchError::InvalidResponse("Empty search result".to_string()))
}

/// Parses cataas `GET /cat?json=true`.
///
/// The service answers with a path such as `/cat/abc123`; those are joined
/// onto [`CATAAS_ORIGIN`]. Absolute URLs pass through.
pub fn parse_cataas(json_str: &str) -> Result<String, FetchError> {
    let response: CataasResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid cataas JSON: {}", e)))?;

    let url = response
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| FetchError::InvalidResponse("Missing url".to_string()))?;

    if url.starts_with("http") {
        Ok(url)
    } else if url.starts_with('/') {
        Ok(format!("{}{}", CATAAS_ORIGIN, url))
    } else {
        Ok(format!("{}/{}", CATAAS_ORIGIN, url))
    }
}

/// Parses random.cat `GET /meow`.
pub fn parse_random_cat(json_str: &str) -> Result<String, FetchError> {
    let response: MeowResponse = serde_json::from_str(json_str)
        .map_err(|e| FetchError::InvalidResponse(format!("Invalid meow JSON: {}", e)))?;

    response
        .file
        .ok_or_else(|| FetchError::InvalidResponse("Missing file".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_breeds() {
        let json = r#"{
            "current_page": 1,
            "data": [
                {"breed": "Abyssinian", "country": "Ethiopia", "coat": "Short"},
                {"breed": "Aegean", "country": "Greece"}
            ],
            "last_page": 4
        }"#;
        let breeds = parse_breeds(json).unwrap();
        assert_eq!(breeds, vec!["Abyssinian", "Aegean"]);
    }

    #[test]
    fn test_parse_breeds_wrong_shape() {
        let err = parse_breeds(r#"{"message": "Server Error"}"#).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_fact() {
        let json = r#"{"fact": "Cats purr at 25 Hz.", "length": 19}"#;
        assert_eq!(parse_fact(json).unwrap(), "Cats purr at 25 Hz.");
    }

    #[test]
    fn test_parse_thecatapi() {
        let json = r#"[{"id": "abc", "url": "https://cdn2.thecatapi.com/images/abc.jpg", "width": 500}]"#;
        assert_eq!(parse_thecatapi(json).unwrap(), "https://cdn2.thecatapi.com/images/abc.jpg");
        assert!(parse_thecatapi("[]").is_err());
    }

    #[test]
    fn test_parse_cataas_relative() {
        let json = r#"{"_id": "xyz", "url": "/cat/xyz"}"#;
        assert_eq!(parse_cataas(json).unwrap(), "https://cataas.com/cat/xyz");
    }

    #[test]
    fn test_parse_cataas_absolute() {
        let json = r#"{"url": "https://cataas.com/cat/xyz"}"#;
        assert_eq!(parse_cataas(json).unwrap(), "https://cataas.com/cat/xyz");
    }

    #[test]
    fn test_parse_cataas_missing_url() {
        assert!(parse_cataas("{}").is_err());
        assert!(parse_cataas(r#"{"url": ""}"#).is_err());
    }

    #[test]
    fn test_parse_random_cat() {
        let json = r#"{"file": "https://purr.objects-us-east-1.dream.io/i/abc.jpg"}"#;
        assert!(parse_random_cat(json).unwrap().starts_with("https://purr"));
        assert!(parse_random_cat(r#"{"error": true}"#).is_err());
    }
}

//! Favorite image records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use super::animal::Animal;

/// Breed recorded when a favorite is added without one.
pub const UNKNOWN_BREED: &str = "Unknown";

/// Last issued favorite id, in milliseconds since the epoch.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Issues a timestamp-derived id that is unique within this process.
///
/// Two records created in the same millisecond get consecutive values.
fn next_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = millis.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

// ============================================================================
// Favorite Candidate
// ============================================================================

/// Input for adding a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCandidate {
    /// Image URL to favorite.
    pub url: String,
    /// Animal shown in the image.
    pub animal: Animal,
    /// Breed, if known.
    #[serde(default)]
    pub breed: Option<String>,
}

impl FavoriteCandidate {
    /// Creates a candidate without a breed.
    pub fn new(url: impl Into<String>, animal: Animal) -> Self {
        Self {
            url: url.into(),
            animal,
            breed: None,
        }
    }

    /// Sets the breed.
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }
}

// ============================================================================
// Favorite Record
// ============================================================================

/// A persisted favorite image.
///
/// Records are only created by the favorites store; `id` and `added_at` never
/// change once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    /// Process-unique, timestamp-derived id.
    pub id: String,
    /// Image URL. Unique within a favorites collection.
    pub url: String,
    /// Animal shown in the image.
    pub animal: Animal,
    /// Breed, "Unknown" when not supplied.
    pub breed: String,
    /// When the favorite was added.
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Builds a new record from a candidate, stamping id and creation time.
    pub fn from_candidate(candidate: FavoriteCandidate, now: DateTime<Utc>) -> Self {
        let breed = candidate
            .breed
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_BREED.to_string());

        Self {
            id: next_id(now),
            url: candidate.url,
            animal: candidate.animal,
            breed,
            added_at: now,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

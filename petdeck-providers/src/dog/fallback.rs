//! Static dog content used when providers are unavailable.

use petdeck_core::{FactEntry, ImageResult};
use rand::Rng;
use rand::seq::SliceRandom;

/// Host serving generated placeholder dog images.
pub const PLACEDOG_BASE: &str = "https://placedog.net";

/// Breeds shown when the breed list cannot be fetched.
pub const DOG_DEFAULT_BREEDS: [&str; 5] = ["Labrador", "German Shepherd", "Golden Retriever", "Bulldog", "Beagle"];

/// Pool sampled for fallback dog facts.
pub const DOG_FACT_POOL: [&str; 15] = [
    "The Greyhound can reach speeds of up to 45 miles per hour.",
    "Dogs can see in color, but not as vividly as humans.",
    "A dog's whiskers help them detect subtle changes in air currents.",
    "Dogs have about 1,700 taste buds compared to humans' 9,000.",
    "Dogs dream like humans - small dogs dream more frequently than larger dogs.",
    "Dogs have an exceptional sense of smell, about 10,000 to 100,000 times more acute than humans.",
    "The Basenji dog is the only breed that doesn't bark, but they can yodel.",
    "Dogs have three eyelids: an upper lid, a lower lid, and a third lid called a nictitating membrane.",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Dogs can understand up to 250 words and gestures, and can count up to five.",
    "The Saluki is the oldest dog breed, dating back to 329 BC.",
    "A dog's sense of hearing is more than ten times more acute than a human's.",
    "Dogs sweat through the pads of their feet.",
    "The Labrador Retriever has been the most popular dog breed since 1991.",
    "Dogs have 42 teeth on average.",
];

/// Pool for substituting a single unsuccessful fact response.
pub const DOG_SINGLE_FACT_POOL: [&str; 5] = [
    "Dogs have an exceptional sense of smell, about 10,000 to 100,000 times more acute than humans.",
    "The Basenji dog is the only breed that doesn't bark, but they can yodel.",
    "Dogs have three eyelids: an upper lid, a lower lid, and a third lid called a nictitating membrane.",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Dogs can understand up to 250 words and gestures, and can count up to five.",
];

/// Number of facts returned by [`sample_fallback_facts`] by default.
pub const DEFAULT_FALLBACK_FACT_COUNT: usize = 5;

/// Samples `count` distinct facts from [`DOG_FACT_POOL`].
pub fn sample_fallback_facts(count: usize) -> Vec<FactEntry> {
    DOG_FACT_POOL
        .choose_multiple(&mut rand::thread_rng(), count)
        .map(ToString::to_string)
        .collect()
}

/// Picks one fact from [`DOG_SINGLE_FACT_POOL`].
pub fn random_single_fact() -> FactEntry {
    let mut rng = rand::thread_rng();
    DOG_SINGLE_FACT_POOL[rng.gen_range(0..DOG_SINGLE_FACT_POOL.len())].to_string()
}

/// Generates one placeholder URL with random dimensions in [200, 300)
/// and a random id in [0, 1000).
pub fn placeholder_url() -> String {
    let mut rng = rand::thread_rng();
    let width: u32 = rng.gen_range(200..300);
    let height: u32 = rng.gen_range(200..300);
    let id: u32 = rng.gen_range(0..1000);
    format!("{}/{}/{}?id={}", PLACEDOG_BASE, width, height, id)
}

/// Generates `count` placeholder images.
pub fn placeholder_images(count: usize) -> Vec<ImageResult> {
    std::iter::repeat_with(placeholder_url)
        .filter_map(|url| ImageResult::parse(url).ok())
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_shape() {
        for image in placeholder_images(50) {
            let rest = image.as_str().strip_prefix("https://placedog.net/").unwrap();
            let (dims, id) = rest.split_once("?id=").unwrap();
            let (w, h) = dims.split_once('/').unwrap();
            let (w, h, id): (u32, u32, u32) = (w.parse().unwrap(), h.parse().unwrap(), id.parse().unwrap());
            assert!((200..300).contains(&w));
            assert!((200..300).contains(&h));
            assert!(id < 1000);
        }
    }

    #[test]
    fn test_sample_is_distinct_subset() {
        let facts = sample_fallback_facts(DEFAULT_FALLBACK_FACT_COUNT);
        assert_eq!(facts.len(), 5);
        let unique: HashSet<_> = facts.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(facts.iter().all(|f| DOG_FACT_POOL.contains(&f.as_str())));
    }

    #[test]
    fn test_sample_caps_at_pool_size() {
        assert_eq!(sample_fallback_facts(100).len(), DOG_FACT_POOL.len());
    }

    #[test]
    fn test_single_fact_from_pool() {
        assert!(DOG_SINGLE_FACT_POOL.contains(&random_single_fact().as_str()));
    }
}

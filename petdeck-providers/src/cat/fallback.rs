//! Static cat content used when providers are unavailable.

use petdeck_core::ImageResult;

/// Images used when every cat image source fails.
pub const CAT_PLACEHOLDERS: [&str; 5] = [
    "https://placekitten.com/200/200",
    "https://placekitten.com/201/201",
    "https://placekitten.com/199/199",
    "https://placekitten.com/202/202",
    "https://placekitten.com/198/198",
];

/// Facts shown when catfact.ninja is unavailable. Order is stable.
pub const CAT_FALLBACK_FACTS: [&str; 10] = [
    "A cat's nose print is unique, like a human's fingerprint.",
    "Cats can jump up to 6 times their body length.",
    "Cats have 32 muscles in each ear.",
    "The richest cat in the world had £7 million fortune.",
    "Cats sleep for 12-16 hours a day on average.",
    "A group of cats is called a clowder.",
    "Cats have whiskers on the backs of their front legs too.",
    "The oldest known pet cat existed 9,500 years ago.",
    "Cats can rotate their ears 180 degrees.",
    "Cats have 230 bones in their body (humans have 206).",
];

/// Breeds shown when the breed list cannot be fetched.
pub const CAT_DEFAULT_BREEDS: [&str; 5] = ["Siamese", "Persian", "Maine Coon", "Bengal", "Ragdoll"];

/// Returns the placeholder set as validated images.
pub fn placeholder_images() -> Vec<ImageResult> {
    CAT_PLACEHOLDERS
        .iter()
        .filter_map(|url| ImageResult::parse(*url).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_valid() {
        assert_eq!(placeholder_images().len(), CAT_PLACEHOLDERS.len());
    }

    #[test]
    fn test_richest_cat_fact_has_pound_sign() {
        assert!(CAT_FALLBACK_FACTS[3].contains("£7 million"));
        assert!(!CAT_FALLBACK_FACTS[3].contains('Â'));
    }
}

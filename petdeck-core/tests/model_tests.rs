//! Integration tests for core model types.

use chrono::Utc;
use petdeck_core::{Animal, FavoriteCandidate, FavoriteRecord, GalleryType, ImageResult};

#[test]
fn test_favorite_record_storage_format() {
    // Slot contents as written by earlier versions of the dashboard.
    let json = r#"[
        {"id":"1700000000000","url":"https://cdn2.thecatapi.com/images/a.jpg","animal":"cat","breed":"Siamese","addedAt":"2023-11-14T22:13:20.000Z"},
        {"id":"1700000000001","url":"https://images.dog.ceo/breeds/beagle/b.jpg","animal":"dog","breed":"Unknown","addedAt":"2023-11-14T22:13:20.001Z"}
    ]"#;

    let records: Vec<FavoriteRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].animal, Animal::Cat);
    assert_eq!(records[1].breed, "Unknown");
}

#[test]
fn test_record_roundtrip_preserves_identity() {
    let record = FavoriteRecord::from_candidate(
        FavoriteCandidate::new("https://example.com/cat.png", Animal::Cat).with_breed("Bengal"),
        Utc::now(),
    );
    let json = serde_json::to_string(&record).unwrap();
    let parsed: FavoriteRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_gallery_type_parse() {
    assert_eq!("breed".parse::<GalleryType>().unwrap(), GalleryType::Breed);
    assert!("grid".parse::<GalleryType>().is_err());
}

#[test]
fn test_image_result_rejects_relative() {
    assert!(ImageResult::parse("/cat/abc").is_err());
}

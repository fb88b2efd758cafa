//! Parser edge case and error handling tests.
//!
//! These tests verify parser behavior with malformed, partial, or edge case inputs.

#[cfg(test)]
mod cat_parser_edge_tests {
    use crate::cat::parser::{parse_breeds, parse_cataas, parse_fact, parse_random_cat, parse_thecatapi};
    use petdeck_fetch::FetchError;

    // ========================================================================
    // JSON Edge Cases
    // ========================================================================

    #[test]
    fn test_parse_breeds_empty_page() {
        let breeds = parse_breeds(r#"{"data": []}"#).unwrap();
        assert!(breeds.is_empty());
    }

    #[test]
    fn test_parse_breeds_entry_without_breed() {
        // Partial entries are a schema failure, not a partial result
        let json = r#"{"data": [{"breed": "Aegean"}, {"country": "Greece"}]}"#;
        assert!(matches!(parse_breeds(json), Err(FetchError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_fact_empty_string_tolerated() {
        assert_eq!(parse_fact(r#"{"fact": ""}"#).unwrap(), "");
    }

    #[test]
    fn test_parse_fact_null() {
        assert!(parse_fact(r#"{"fact": null}"#).is_err());
    }

    #[test]
    fn test_parse_thecatapi_object_instead_of_array() {
        assert!(parse_thecatapi(r#"{"url": "https://x"}"#).is_err());
    }

    #[test]
    fn test_parse_thecatapi_first_hit_without_url() {
        assert!(parse_thecatapi(r#"[{"id": "abc"}]"#).is_err());
    }

    #[test]
    fn test_parse_thecatapi_extra_hits_ignored() {
        let json = r#"[{"url": "https://a"}, {"url": "https://b"}]"#;
        assert_eq!(parse_thecatapi(json).unwrap(), "https://a");
    }

    #[test]
    fn test_parse_cataas_bare_path() {
        assert_eq!(parse_cataas(r#"{"url": "cat/abc"}"#).unwrap(), "https://cataas.com/cat/abc");
    }

    #[test]
    fn test_parse_random_cat_html() {
        assert!(parse_random_cat("<!DOCTYPE html><html></html>").is_err());
    }

    #[test]
    fn test_parse_truncated_json() {
        assert!(parse_fact(r#"{"fact": "Cats"#).is_err());
        assert!(parse_breeds(r#"{"data": [{"breed""#).is_err());
    }
}

#[cfg(test)]
mod dog_parser_edge_tests {
    use crate::dog::parser::{parse_breeds, parse_fact, parse_images};
    use petdeck_fetch::FetchError;

    #[test]
    fn test_parse_breeds_empty_map() {
        assert!(parse_breeds(r#"{"message": {}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_breeds_message_is_array() {
        assert!(parse_breeds(r#"{"message": ["hound"]}"#).is_err());
    }

    #[test]
    fn test_parse_images_missing_message() {
        assert!(matches!(
            parse_images(r#"{"status": "success"}"#),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_images_keeps_provider_order() {
        let json = r#"{"message": ["https://b.jpg", "https://a.jpg"]}"#;
        assert_eq!(parse_images(json).unwrap(), vec!["https://b.jpg", "https://a.jpg"]);
    }

    #[test]
    fn test_parse_fact_takes_first() {
        let json = r#"{"facts": ["first", "second"], "success": true}"#;
        assert_eq!(parse_fact(json).unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn test_parse_fact_success_missing() {
        // Missing success flag counts as unsuccessful
        assert_eq!(parse_fact(r#"{"facts": ["x"]}"#).unwrap(), None);
    }
}

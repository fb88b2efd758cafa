//! URL validation helpers.

use url::Url;

/// Image file extensions accepted by [`has_image_extension`].
const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "gif", "png", "webp"];

/// Loose validity check used by the image fallback chain.
///
/// A candidate URL is accepted when it is non-empty and starts with `http`
/// (which also covers `https`). Anything stricter belongs to
/// [`has_image_extension`].
pub fn is_valid_image_url(url: &str) -> bool {
    !url.is_empty() && url.starts_with("http")
}

/// Strict check: parses as a URL and the path ends in a known image extension.
///
/// Not part of the fetch path. Providers such as cataas and placedog serve
/// images from extension-less URLs, so this is advisory only.
pub fn has_image_extension(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    parsed
        .path()
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

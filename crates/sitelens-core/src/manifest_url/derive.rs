//! Manifest and base URL derivation.

use super::MANIFEST_FILENAME;

/// Derives the manifest URL from raw user input.
///
/// The input is trimmed first. Empty input yields an empty string; input that
/// already ends in the manifest filename is returned as is; anything else gets
/// `/site.json` appended. No URL syntax checks are done here.
///
/// # Examples
///
/// - `derive_manifest_url("https://x.com")` → `"https://x.com/site.json"`
/// - `derive_manifest_url("https://x.com/site.json")` → `"https://x.com/site.json"`
pub fn derive_manifest_url(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        String::new()
    } else if input.ends_with(MANIFEST_FILENAME) {
        input.to_string()
    } else {
        format!("{}/{}", input, MANIFEST_FILENAME)
    }
}

/// Strips the final `/<name>.json` segment from a manifest URL.
///
/// Only the last path segment is considered, so a `.json` earlier in the
/// path is left alone. A URL whose last segment is not a `.json` file is
/// returned unchanged.
pub fn derive_base_url(manifest_url: &str) -> String {
    if !manifest_url.ends_with(".json") {
        return manifest_url.to_string();
    }
    let cut = manifest_url.rfind('/').unwrap_or(0);
    manifest_url[..cut].to_string()
}

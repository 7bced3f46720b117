//! Manifest URL normalization.
//!
//! Turns whatever the user typed (a site root or a direct manifest URL) into
//! the canonical manifest URL ending in [`MANIFEST_FILENAME`], plus the base
//! URL that relative asset paths in the manifest are resolved against.

mod derive;
mod resolve;

use serde::Serialize;

pub use derive::{derive_base_url, derive_manifest_url};
pub use resolve::resolve_asset;

/// Fixed manifest filename, used for both suffix detection and suffix stripping.
pub const MANIFEST_FILENAME: &str = "site.json";

/// Normalized input state: the last raw input and the two URLs derived from it.
///
/// `manifest_url` is empty iff the trimmed input is empty; otherwise it ends in
/// [`MANIFEST_FILENAME`] and `base_url` is a strict prefix of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestReference {
    raw_input: String,
    manifest_url: String,
    base_url: String,
}

impl ManifestReference {
    pub fn new(raw_input: &str) -> Self {
        let mut reference = Self::default();
        reference.set_input(raw_input);
        reference
    }

    /// Replace the raw input and recompute both derived URLs.
    pub fn set_input(&mut self, raw_input: &str) {
        self.raw_input = raw_input.to_string();
        self.manifest_url = derive_manifest_url(raw_input);
        self.base_url = derive_base_url(&self.manifest_url);
        tracing::debug!(
            manifest_url = %self.manifest_url,
            base_url = %self.base_url,
            "manifest reference updated"
        );
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when there is nothing to fetch.
    pub fn is_empty(&self) -> bool {
        self.manifest_url.is_empty()
    }
}

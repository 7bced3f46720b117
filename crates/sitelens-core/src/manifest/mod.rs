//! Site manifest model: validation, metadata extraction and item projection.
//!
//! The fetched body is treated as untrusted, untyped JSON. [`analyze`] runs
//! parsing, the schema check and field-level defaulting as one explicit step
//! so nothing downstream has to probe optional fields.

mod item;
mod metadata;
mod validate;

use serde::Serialize;

use crate::fetch::FetchError;

pub use item::ImageCardView;
pub use metadata::SiteMetadata;
pub use validate::{validate, SchemaError};

/// Everything extracted from one valid manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteAnalysis {
    pub metadata: SiteMetadata,
    pub items: Vec<ImageCardView>,
}

/// Parses, validates and projects a manifest body.
///
/// `base_url` is copied into every card so relative image references can be
/// resolved later.
pub fn analyze(body: &[u8], base_url: &str) -> Result<SiteAnalysis, FetchError> {
    let payload: serde_json::Value = serde_json::from_slice(body)?;
    let items = validate(&payload)?;
    let items = items
        .iter()
        .map(|item| ImageCardView::from_item(item, base_url))
        .collect();
    Ok(SiteAnalysis {
        metadata: SiteMetadata::from_payload(&payload),
        items,
    })
}

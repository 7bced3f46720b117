//! Projection of manifest items into card view-models.

use serde::Serialize;
use serde_json::Value;

use super::metadata::truthy_text;

/// Render-ready projection of one manifest item.
///
/// `image_ref` is kept relative to `base_url`; resolving it (and choosing a
/// placeholder when it is absent) is left to the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCardView {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image_ref: Option<String>,
    pub base_url: String,
    pub created: Option<String>,
    pub updated: Option<String>,
}

impl ImageCardView {
    pub fn from_item(item: &Value, base_url: &str) -> Self {
        let meta = item.get("metadata");
        let image_ref = meta
            .and_then(|m| m.get("files"))
            .and_then(Value::as_array)
            .and_then(|files| files.first())
            .and_then(Value::as_str)
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        Self {
            title: text(item, "title"),
            description: text(item, "description"),
            slug: text(item, "slug"),
            image_ref,
            base_url: base_url.to_string(),
            created: truthy_text(meta.and_then(|m| m.get("created"))),
            updated: truthy_text(meta.and_then(|m| m.get("updated"))),
        }
    }
}

fn text(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

//! Site overview metadata extraction with defaults.

use serde::Serialize;
use serde_json::Value;

const DEFAULT_NAME: &str = "Unknown";
const DEFAULT_DESCRIPTION: &str = "No description provided";
const DEFAULT_THEME: &str = "Unknown";
const DEFAULT_DATE: &str = "N/A";

/// Overview record for a successfully fetched manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub name: String,
    pub description: String,
    /// Relative asset path of the site logo; empty when absent.
    pub logo_path: String,
    pub theme: String,
    pub created: String,
    pub updated: String,
}

impl SiteMetadata {
    /// Reads the overview fields from a validated payload, defaulting every
    /// missing or falsy value.
    pub fn from_payload(payload: &Value) -> Self {
        let meta = payload.get("metadata");
        let meta_field = |key: &str| meta.and_then(|m| m.get(key));

        Self {
            name: truthy_text(payload.get("name")).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: truthy_text(payload.get("description"))
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            logo_path: truthy_text(meta_field("logo")).unwrap_or_default(),
            theme: match meta_field("theme") {
                Some(Value::String(s)) => s.clone(),
                _ => DEFAULT_THEME.to_string(),
            },
            created: truthy_text(meta_field("created")).unwrap_or_else(|| DEFAULT_DATE.to_string()),
            updated: truthy_text(meta_field("updated")).unwrap_or_else(|| DEFAULT_DATE.to_string()),
        }
    }
}

/// Display text for a truthy scalar.
///
/// `null`, `false`, `0` and `""` count as absent. Non-empty strings are kept,
/// other truthy scalars are rendered as JSON text. Objects and arrays have no
/// sensible display form and count as absent too.
pub(crate) fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().map_or(true, |f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

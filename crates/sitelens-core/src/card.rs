//! Card component props.
//!
//! The card only turns a view-model into display values: the image source
//! (resolved reference or placeholder), the link target and its CSS class.

use crate::manifest::ImageCardView;
use crate::manifest_url::resolve_asset;

/// Display values for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProps {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub href: String,
    pub created: Option<String>,
    pub updated: Option<String>,
}

impl CardProps {
    pub fn from_view(view: &ImageCardView, placeholder: &str) -> Self {
        let image_src = match &view.image_ref {
            Some(r) => resolve_asset(&view.base_url, r),
            None => placeholder.to_string(),
        };
        Self {
            title: view.title.clone(),
            description: view.description.clone(),
            image_src,
            href: resolve_asset(&view.base_url, &view.slug),
            created: view.created.clone(),
            updated: view.updated.clone(),
        }
    }

    pub fn has_dates(&self) -> bool {
        self.created.is_some() || self.updated.is_some()
    }

    pub fn class(hovered: bool) -> &'static str {
        if hovered {
            "card card-hover"
        } else {
            "card"
        }
    }
}

//! sitelens core: fetch a site's `site.json` manifest, validate it, and turn
//! it into an overview record plus card view-models.

pub mod config;
pub mod logging;

pub mod card;
pub mod fetch;
pub mod manifest;
pub mod manifest_url;
pub mod pipeline;
pub mod render;

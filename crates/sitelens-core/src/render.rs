//! HTML and text rendering of the analyzer page.
//!
//! Pure functions of the reference and the fetch state; nothing here touches
//! the pipeline. HTML goes through [maud](https://maud.lambda.xyz/), which
//! escapes every interpolated manifest value.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fmt::Write;

use crate::card::CardProps;
use crate::manifest::SiteMetadata;
use crate::manifest_url::{resolve_asset, ManifestReference};
use crate::pipeline::{FetchPhase, FetchState};

const STYLE: &str = r#"
.search-container { display: flex; justify-content: center; align-items: center; max-width: 600px; margin: 24px auto; padding: 8px 16px; }
.overview { margin: 16px; padding: 16px; border: 1px solid #708090; border-radius: 8px; background-color: #f9f9f9; }
.overview img { max-width: 100px; height: auto; margin-bottom: 8px; }
.result { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.card { display: flex; flex-direction: column; align-items: center; border: 2px solid; margin: 8px; padding: 16px; text-decoration: none; }
.card:hover, .card-hover { background-color: #ffd100; }
.card img { width: 240px; height: auto; margin-bottom: 8px; }
.title, .description { text-align: center; }
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page heading.
    pub title: String,
    /// Image used for cards without files.
    pub placeholder_image: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Site Analyzer".to_string(),
            placeholder_image: "https://via.placeholder.com/150".to_string(),
        }
    }
}

/// Full HTML page: heading, input echo, overview panel and card grid.
pub fn render_page(reference: &ManifestReference, state: &FetchState, opts: &RenderOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (opts.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h2 { (opts.title) }
                div class="search-container" {
                    input id="input" placeholder="Enter site URL here" value=(reference.raw_input());
                    @if state.loading {
                        span class="loading" { "Loading…" }
                    }
                }
                @if let Some(meta) = &state.metadata {
                    (overview(meta, &state.base_url))
                }
                div class="result" {
                    @for view in &state.items {
                        (card(&CardProps::from_view(view, &opts.placeholder_image)))
                    }
                }
            }
        }
    }
}

fn overview(meta: &SiteMetadata, base_url: &str) -> Markup {
    html! {
        div class="overview" {
            h3 { "Overview" }
            p { strong { "Name:" } " " (meta.name) }
            p { strong { "Description:" } " " (meta.description) }
            @if !meta.logo_path.is_empty() {
                img src=(resolve_asset(base_url, &meta.logo_path)) alt=(meta.name);
            }
            p { strong { "Theme:" } " " (meta.theme) }
            p { strong { "Created:" } " " (meta.created) }
            p { strong { "Last Updated:" } " " (meta.updated) }
        }
    }
}

fn card(props: &CardProps) -> Markup {
    html! {
        a class=(CardProps::class(false)) tabindex="0" href=(props.href) target="_blank" {
            img src=(props.image_src) alt=(props.title);
            div class="title" { (props.title) }
            div class="description" { (props.description) }
            @if props.has_dates() {
                div class="dates" {
                    p { strong { "Created:" } " " (props.created.as_deref().unwrap_or_default()) }
                    p { strong { "Updated:" } " " (props.updated.as_deref().unwrap_or_default()) }
                }
            }
        }
    }
}

/// Plain-text summary for terminals.
pub fn render_text(state: &FetchState, placeholder: &str) -> String {
    let mut out = String::new();
    match state.phase() {
        FetchPhase::Idle => out.push_str("Nothing analyzed yet.\n"),
        FetchPhase::Loading => out.push_str("Loading…\n"),
        FetchPhase::Failure => out.push_str("No results.\n"),
        FetchPhase::Success => {
            if let Some(meta) = &state.metadata {
                let _ = writeln!(out, "Name:         {}", meta.name);
                let _ = writeln!(out, "Description:  {}", meta.description);
                if !meta.logo_path.is_empty() {
                    let _ = writeln!(out, "Logo:         {}", resolve_asset(&state.base_url, &meta.logo_path));
                }
                let _ = writeln!(out, "Theme:        {}", meta.theme);
                let _ = writeln!(out, "Created:      {}", meta.created);
                let _ = writeln!(out, "Last Updated: {}", meta.updated);
            }
            let _ = writeln!(out, "\n{} item(s):", state.items.len());
            for view in &state.items {
                let props = CardProps::from_view(view, placeholder);
                let _ = writeln!(out, "  - {}  <{}>", props.title, props.href);
                let _ = writeln!(out, "    image: {}", props.image_src);
            }
        }
    }
    out
}

//! `sitelens analyze [url]` – fetch a manifest and print the result.

use anyhow::{Context, Result};
use sitelens_core::config::SitelensConfig;
use sitelens_core::fetch::{CurlFetcher, FetchOptions};
use sitelens_core::manifest_url::ManifestReference;
use sitelens_core::pipeline::{FetchState, ManifestPipeline};
use sitelens_core::render::{render_page, render_text, RenderOptions};
use std::path::Path;
use std::sync::Arc;

pub async fn run_analyze(
    cfg: &SitelensConfig,
    url: Option<&str>,
    html: Option<&Path>,
    json: bool,
) -> Result<()> {
    let reference = ManifestReference::new(url.unwrap_or(&cfg.default_url));
    if reference.is_empty() {
        anyhow::bail!("no site URL given and `default_url` is empty");
    }

    let fetcher = CurlFetcher::new(FetchOptions::from(&cfg.http));
    let pipeline = ManifestPipeline::new(Arc::new(fetcher));
    let outcome = pipeline.submit(&reference).await;
    tracing::debug!(?outcome, url = reference.manifest_url(), "analysis finished");
    let state = pipeline.snapshot();

    if let Some(path) = html {
        write_html(cfg, &reference, &state, path)?;
        eprintln!("Wrote {}", path.display());
    }

    if json {
        let doc = serde_json::json!({
            "reference": reference,
            "phase": state.phase(),
            "state": state,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Manifest: {}", reference.manifest_url());
        print!("{}", render_text(&state, &cfg.placeholder_image));
    }
    Ok(())
}

fn write_html(
    cfg: &SitelensConfig,
    reference: &ManifestReference,
    state: &FetchState,
    path: &Path,
) -> Result<()> {
    let opts = RenderOptions {
        placeholder_image: cfg.placeholder_image.clone(),
        ..RenderOptions::default()
    };
    let page = render_page(reference, state, &opts).into_string();
    std::fs::write(path, page).with_context(|| format!("writing {}", path.display()))
}

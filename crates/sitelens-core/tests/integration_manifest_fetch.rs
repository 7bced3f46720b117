//! Integration test: local HTTP server serving site manifests, fetched through
//! the real curl fetcher and committed by the pipeline.

mod common;

use std::sync::Arc;

use common::manifest_server::{self, Route};
use sitelens_core::fetch::{CurlFetcher, FetchOptions};
use sitelens_core::manifest_url::ManifestReference;
use sitelens_core::pipeline::{FetchPhase, ManifestPipeline, SubmitOutcome};

const MANIFEST: &str = r#"{
    "name": "Docs",
    "description": "Project documentation",
    "metadata": { "logo": "files/logo.png", "theme": { "element": "clean-one" }, "created": 1700000000 },
    "items": [
        { "title": "Intro", "description": "Start here", "slug": "intro",
          "metadata": { "files": ["files/intro.png"] } },
        { "title": "Setup", "description": "Install", "slug": "setup" }
    ]
}"#;

fn pipeline() -> ManifestPipeline {
    let opts = FetchOptions {
        connect_timeout_secs: 5,
        timeout_secs: 5,
        ..FetchOptions::default()
    };
    ManifestPipeline::new(Arc::new(CurlFetcher::new(opts)))
}

#[tokio::test]
async fn fetches_and_projects_manifest() {
    let origin = manifest_server::start(vec![("/docs/site.json", Route::ok(MANIFEST))]);
    let p = pipeline();
    let reference = ManifestReference::new(&format!("{}/docs", origin));

    let outcome = p.submit(&reference).await;
    assert_eq!(outcome, SubmitOutcome::Committed(FetchPhase::Success));

    let state = p.snapshot();
    assert!(!state.loading);
    assert_eq!(state.base_url, format!("{}/docs", origin));
    let meta = state.metadata.expect("metadata present");
    assert_eq!(meta.name, "Docs");
    assert_eq!(meta.logo_path, "files/logo.png");
    assert_eq!(meta.theme, "Unknown");
    assert_eq!(meta.created, "1700000000");
    assert_eq!(meta.updated, "N/A");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].image_ref.as_deref(), Some("files/intro.png"));
    assert!(state.items[1].image_ref.is_none());
}

#[tokio::test]
async fn direct_manifest_url_is_used_as_is() {
    let origin = manifest_server::start(vec![("/site.json", Route::ok(MANIFEST))]);
    let p = pipeline();
    let reference = ManifestReference::new(&format!("{}/site.json", origin));
    assert_eq!(reference.base_url(), origin);
    assert_eq!(
        p.submit(&reference).await,
        SubmitOutcome::Committed(FetchPhase::Success)
    );
}

#[tokio::test]
async fn http_error_status_fails_cleanly() {
    let origin = manifest_server::start(vec![(
        "/site.json",
        Route::status(500, r#"{"items":[{}]}"#),
    )]);
    let p = pipeline();
    let outcome = p.submit(&ManifestReference::new(&origin)).await;
    assert_eq!(outcome, SubmitOutcome::Committed(FetchPhase::Failure));
    let state = p.snapshot();
    assert!(state.items.is_empty());
    assert!(state.metadata.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn missing_manifest_fails_cleanly() {
    let origin = manifest_server::start(vec![]);
    let p = pipeline();
    let outcome = p.submit(&ManifestReference::new(&origin)).await;
    assert_eq!(outcome, SubmitOutcome::Committed(FetchPhase::Failure));
}

#[tokio::test]
async fn malformed_json_fails_cleanly() {
    let origin = manifest_server::start(vec![("/site.json", Route::ok("{\"items\": [1,"))]);
    let p = pipeline();
    let outcome = p.submit(&ManifestReference::new(&origin)).await;
    assert_eq!(outcome, SubmitOutcome::Committed(FetchPhase::Failure));
    assert!(p.snapshot().metadata.is_none());
}

#[tokio::test]
async fn empty_items_is_failure_not_empty_success() {
    let origin = manifest_server::start(vec![("/site.json", Route::ok(r#"{"items": []}"#))]);
    let p = pipeline();
    let outcome = p.submit(&ManifestReference::new(&origin)).await;
    assert_eq!(outcome, SubmitOutcome::Committed(FetchPhase::Failure));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stale_response_does_not_overwrite_newer_one() {
    let origin = manifest_server::start(vec![
        (
            "/old/site.json",
            Route::ok(r#"{"name":"old","items":[{"slug":"o"}]}"#).delayed(400),
        ),
        ("/new/site.json", Route::ok(r#"{"name":"new","items":[{"slug":"n"}]}"#)),
    ]);
    let p = pipeline();
    let old = ManifestReference::new(&format!("{}/old", origin));
    let new = ManifestReference::new(&format!("{}/new", origin));

    let (first, second) = tokio::join!(p.submit(&old), async {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        p.submit(&new).await
    });

    assert_eq!(first, SubmitOutcome::Superseded);
    assert_eq!(second, SubmitOutcome::Committed(FetchPhase::Success));
    let state = p.snapshot();
    assert_eq!(state.metadata.map(|m| m.name).as_deref(), Some("new"));
    assert_eq!(state.items[0].slug, "n");
}

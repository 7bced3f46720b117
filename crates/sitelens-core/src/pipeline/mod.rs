//! Manifest fetch-and-validate pipeline.
//!
//! Owns the single [`FetchState`]. A fetch goes through [`ManifestPipeline::begin`]
//! (synchronous: bumps the generation and sets `loading`), the network call on
//! the blocking pool, and [`ManifestPipeline::commit`]. Every attempt carries
//! the generation it was started with; a result is only committed while that
//! generation is still the latest, so a slow stale response can never
//! overwrite the state of a newer request. Superseded requests are not
//! aborted, their results are dropped.

mod state;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::fetch::{FetchError, ManifestFetcher};
use crate::manifest::{analyze, SiteAnalysis};
use crate::manifest_url::ManifestReference;

pub use state::{FetchPhase, FetchState};

/// Handle for one fetch attempt, captured at initiation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    manifest_url: String,
    base_url: String,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// What happened to a submitted fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The reference was empty; nothing was fetched and state is unchanged.
    Skipped,
    /// The result was committed and the pipeline is now in this phase.
    Committed(FetchPhase),
    /// A newer fetch was started (or the pipeline reset) before this one
    /// finished; its result was discarded.
    Superseded,
}

pub struct ManifestPipeline {
    fetcher: Arc<dyn ManifestFetcher>,
    state: RwLock<FetchState>,
    latest: AtomicU64,
}

impl ManifestPipeline {
    pub fn new(fetcher: Arc<dyn ManifestFetcher>) -> Self {
        Self {
            fetcher,
            state: RwLock::new(FetchState::default()),
            latest: AtomicU64::new(0),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> FetchState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn phase(&self) -> FetchPhase {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .phase()
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FetchState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a fetch attempt for `reference`.
    ///
    /// Returns `None` (and leaves state untouched) when the reference is
    /// empty. Otherwise sets `loading` before returning and hands back the
    /// ticket that [`commit`](Self::commit) needs.
    pub fn begin(&self, reference: &ManifestReference) -> Option<FetchTicket> {
        if reference.is_empty() {
            tracing::debug!("fetch requested with empty manifest URL; ignoring");
            return None;
        }
        let mut state = self.write_state();
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        state.loading = true;
        drop(state);

        tracing::info!(
            generation,
            url = reference.manifest_url(),
            "fetching site manifest"
        );
        Some(FetchTicket {
            generation,
            manifest_url: reference.manifest_url().to_string(),
            base_url: reference.base_url().to_string(),
        })
    }

    /// Commits the outcome of `ticket`'s attempt if it is still the latest.
    ///
    /// Returns false when the ticket was superseded; state is then untouched.
    pub fn commit(&self, ticket: FetchTicket, result: Result<SiteAnalysis, FetchError>) -> bool {
        let mut state = self.write_state();
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket.generation != latest {
            tracing::debug!(
                generation = ticket.generation,
                latest,
                url = %ticket.manifest_url,
                "discarding superseded manifest result"
            );
            return false;
        }

        match result {
            Ok(analysis) => {
                tracing::info!(
                    generation = ticket.generation,
                    url = %ticket.manifest_url,
                    items = analysis.items.len(),
                    "site manifest loaded"
                );
                state.succeed(analysis, &ticket.base_url);
            }
            Err(err) => {
                tracing::warn!(
                    generation = ticket.generation,
                    url = %ticket.manifest_url,
                    kind = err.kind().as_str(),
                    "site manifest fetch failed: {}",
                    err
                );
                state.fail();
            }
        }
        true
    }

    /// Fetches, validates and commits the manifest for `reference`.
    ///
    /// Never fails: every error ends in the failure state and is logged.
    pub async fn submit(&self, reference: &ManifestReference) -> SubmitOutcome {
        let Some(ticket) = self.begin(reference) else {
            return SubmitOutcome::Skipped;
        };

        let fetcher = Arc::clone(&self.fetcher);
        let url = ticket.manifest_url.clone();
        let base_url = ticket.base_url.clone();
        let result = tokio::task::spawn_blocking(move || {
            let body = fetcher.fetch(&url)?;
            analyze(&body, &base_url)
        })
        .await
        .unwrap_or_else(|e| Err(FetchError::Task(e.to_string())));

        if self.commit(ticket, result) {
            SubmitOutcome::Committed(self.phase())
        } else {
            SubmitOutcome::Superseded
        }
    }

    /// Clears items and metadata and invalidates any in-flight fetch.
    pub fn reset(&self) {
        let mut state = self.write_state();
        self.latest.fetch_add(1, Ordering::SeqCst);
        *state = FetchState::default();
        tracing::debug!("pipeline reset");
    }
}

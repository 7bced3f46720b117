//! Observable fetch state.

use serde::Serialize;

use crate::manifest::{ImageCardView, SiteAnalysis, SiteMetadata};

/// Where the pipeline is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPhase {
    /// Nothing fetched yet (or reset).
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last committed fetch produced a valid manifest.
    Success,
    /// The last committed fetch failed for any reason.
    Failure,
}

/// Read-only view of the pipeline for the presentation layer.
///
/// Only the pipeline writes it. On success `metadata` is present and `items`
/// holds one card per manifest item; on failure both are cleared. `base_url`
/// belongs to the committed fetch, not to whatever is being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchState {
    pub loading: bool,
    pub items: Vec<ImageCardView>,
    pub metadata: Option<SiteMetadata>,
    pub base_url: String,
    #[serde(skip)]
    settled: bool,
}

impl FetchState {
    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if !self.settled {
            FetchPhase::Idle
        } else if self.metadata.is_some() {
            FetchPhase::Success
        } else {
            FetchPhase::Failure
        }
    }

    pub(crate) fn succeed(&mut self, analysis: SiteAnalysis, base_url: &str) {
        *self = FetchState {
            loading: false,
            items: analysis.items,
            metadata: Some(analysis.metadata),
            base_url: base_url.to_string(),
            settled: true,
        };
    }

    pub(crate) fn fail(&mut self) {
        *self = FetchState {
            settled: true,
            ..FetchState::default()
        };
    }
}

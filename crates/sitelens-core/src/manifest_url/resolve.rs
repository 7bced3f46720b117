//! Resolving manifest asset references against the base URL.

/// Resolves an asset reference from the manifest against `base_url`.
///
/// References that are absolute URLs with a host are returned unchanged.
/// A `word:rest` name without a host (e.g. `img:1.png`) is still relative.
/// Everything else is joined as `{base_url}/{reference}`, with at most one
/// slash at the seam.
pub fn resolve_asset(base_url: &str, reference: &str) -> String {
    if url::Url::parse(reference).map_or(false, |u| u.has_host()) {
        return reference.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let rel = reference.trim_start_matches('/');
    format!("{}/{}", base, rel)
}

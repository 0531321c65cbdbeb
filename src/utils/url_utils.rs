//! URL helpers for link capture.
//!
//! Captured anchors arrive as absolute URLs resolved by the page itself;
//! these helpers decide which of them are worth keeping.

use url::Url;

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

/// Check whether `candidate` points at the same host as `base`.
///
/// Comparison is on the host component only; scheme and port differences
/// do not matter for "is this part of the same documentation site".
#[must_use]
pub fn is_same_host(candidate: &str, base: &str) -> bool {
    let (Ok(candidate), Ok(base)) = (Url::parse(candidate), Url::parse(base)) else {
        return false;
    };

    match (candidate.host_str(), base.host_str()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

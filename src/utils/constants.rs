//! Shared configuration constants for docscrape
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Documentation page this tool targets by default
///
/// The Cortex Cloud onboarding API reference. The page body is assembled
/// client-side, so a plain HTTP fetch returns a skeleton; rendering in a
/// real browser is required to see the content.
pub const DOCS_URL: &str =
    "https://docs-cortex.paloaltonetworks.com/r/Cortex-Cloud-Platform-APIs/Cloud-Onboarding-APIs";

/// Default output filename for the extracted text
pub const OUTPUT_FILE: &str = "cortex-cloud-onboarding-api-content.txt";

/// Default navigation timeout: 30 seconds
///
/// Bounds the initial page request. Documentation portals sit behind CDNs
/// and usually answer well under this; past 30s the run should fail rather
/// than hang.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default render timeout: 20 seconds
///
/// Bounds the wait for the page load to complete after navigation. Covers
/// the client-side framework bootstrapping and the XHR round trips that
/// fill in the article body.
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 20;

/// Default settle delay after the page reports ready: 3 seconds
///
/// Single-page-app portals keep patching the DOM briefly after the load
/// event. A short fixed delay picks up that late content without a
/// per-site tuning knob.
pub const DEFAULT_SETTLE_DELAY_SECS: u64 = 3;

/// Upper bound on the readiness poll: 10 seconds
///
/// The poll watches `document.readyState` and the body text after the load
/// event fires. If the markers never show up we proceed with whatever is
/// there; the navigation itself already succeeded.
pub const READINESS_POLL_MAX_SECS: u64 = 10;

/// Interval between readiness probes: 100 milliseconds
pub const READINESS_POLL_INTERVAL_MS: u64 = 100;

/// Number of characters shown in the console preview
///
/// Counted in characters, not bytes, so multi-byte text never gets split
/// mid-character.
pub const PREVIEW_CHARS: usize = 1000;

/// Default cap on captured related links: 20
///
/// Keeps the optional links file focused on the navigation-relevant
/// neighborhood of the page instead of dumping every footer anchor.
pub const DEFAULT_MAX_LINKS: usize = 20;

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Chrome releases new stable versions ~every 4 weeks.
/// Update quarterly to stay within reasonable version window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

//! Core configuration types for documentation scraping
//!
//! This module contains the main `ScrapeConfig` struct that defines the
//! parameters for a single fetch-render-extract run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{
    DEFAULT_MAX_LINKS, DEFAULT_RENDER_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_SECS, DOCS_URL, OUTPUT_FILE, PREVIEW_CHARS,
};

/// Configuration for a single documentation scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Page to fetch and render.
    ///
    /// **INVARIANT:** Always carries an explicit scheme (normalized in
    /// builder). Downstream host comparison and navigation rely on it.
    pub(crate) url: String,

    /// Destination for the extracted text. Sibling outputs (raw HTML,
    /// links JSON) derive their paths from this one by swapping the
    /// extension.
    pub(crate) output_path: PathBuf,

    /// Timeout in seconds for the `page.goto()` navigation
    ///
    /// Bounds the initial request. Prevents hangs on slow DNS or
    /// unresponsive servers.
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Timeout in seconds for `page.wait_for_navigation()`
    ///
    /// Bounds the wait for the load event after navigation. Prevents hangs
    /// on pages with long-polling, streaming, or infinite JS loops.
    ///
    /// Default: 20 seconds
    pub(crate) render_timeout_secs: u64,

    /// Delay in seconds after the page reports ready
    ///
    /// Gives client-side frameworks a moment to finish late DOM patches
    /// before extraction.
    ///
    /// Default: 3 seconds
    pub(crate) settle_delay_secs: u64,

    /// Number of characters of extracted text shown in the summary preview
    ///
    /// Default: 1000
    pub(crate) preview_chars: usize,

    pub(crate) headless: bool,
    pub(crate) save_raw_html: bool,
    pub(crate) save_links: bool,

    /// Cap on captured related links when `save_links` is enabled
    ///
    /// Default: 20
    pub(crate) max_links: usize,

    /// Chrome user data directory for browser profile isolation
    /// When set, the session uses this directory instead of creating a
    /// fresh temp profile. Prevents profile lock contention when several
    /// runs share a machine.
    #[serde(skip)]
    pub(crate) chrome_data_dir: Option<PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DOCS_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            render_timeout_secs: DEFAULT_RENDER_TIMEOUT_SECS,
            settle_delay_secs: DEFAULT_SETTLE_DELAY_SECS,
            preview_chars: PREVIEW_CHARS,
            headless: true,
            save_raw_html: false,
            save_links: false,
            max_links: DEFAULT_MAX_LINKS,
            chrome_data_dir: None,
        }
    }
}

impl ScrapeConfig {
    /// Set Chrome user data directory for browser profile isolation
    ///
    /// When set, the browser uses this specific directory for its user
    /// data instead of a throwaway temp profile. The directory is left in
    /// place on shutdown; callers own its lifecycle.
    #[must_use]
    pub fn with_chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }

    /// Get the Chrome user data directory if configured
    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }
}

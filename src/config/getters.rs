//! Getter methods for `ScrapeConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use std::path::Path;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Get the navigation timeout in seconds
    ///
    /// Bounds `page.goto()` on the target URL.
    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    /// Get the render timeout in seconds
    ///
    /// Bounds `page.wait_for_navigation()` after the initial request.
    #[must_use]
    pub fn render_timeout_secs(&self) -> u64 {
        self.render_timeout_secs
    }

    /// Get the post-ready settle delay in seconds
    #[must_use]
    pub fn settle_delay_secs(&self) -> u64 {
        self.settle_delay_secs
    }

    /// Get the number of characters shown in the summary preview
    #[must_use]
    pub fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn save_raw_html(&self) -> bool {
        self.save_raw_html
    }

    #[must_use]
    pub fn save_links(&self) -> bool {
        self.save_links
    }

    /// Get the cap on captured related links
    #[must_use]
    pub fn max_links(&self) -> usize {
        self.max_links
    }

    /// Path for the optional raw HTML sibling file
    #[must_use]
    pub fn html_output_path(&self) -> std::path::PathBuf {
        self.output_path.with_extension("html")
    }

    /// Path for the optional related-links sibling file
    #[must_use]
    pub fn links_output_path(&self) -> std::path::PathBuf {
        self.output_path.with_extension("json")
    }
}

//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that required fields are set before building a `ScrapeConfig`.

use crate::utils::{
    DEFAULT_MAX_LINKS, DEFAULT_RENDER_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_SECS, PREVIEW_CHARS,
};
use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScrapeConfig;

// Type states for the builder
pub struct WithOutputPath;
pub struct WithUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) url: Option<String>,
    pub(crate) output_path: Option<PathBuf>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) render_timeout_secs: u64,
    pub(crate) settle_delay_secs: u64,
    pub(crate) preview_chars: usize,
    pub(crate) headless: bool,
    pub(crate) save_raw_html: bool,
    pub(crate) save_links: bool,
    pub(crate) max_links: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            url: None,
            output_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            render_timeout_secs: DEFAULT_RENDER_TIMEOUT_SECS,
            settle_delay_secs: DEFAULT_SETTLE_DELAY_SECS,
            preview_chars: PREVIEW_CHARS,
            headless: true,
            save_raw_html: false,
            save_links: false,
            max_links: DEFAULT_MAX_LINKS,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn output_path(self, path: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithOutputPath> {
        ScrapeConfigBuilder {
            url: self.url,
            output_path: Some(path.into()),
            request_timeout_secs: self.request_timeout_secs,
            render_timeout_secs: self.render_timeout_secs,
            settle_delay_secs: self.settle_delay_secs,
            preview_chars: self.preview_chars,
            headless: self.headless,
            save_raw_html: self.save_raw_html,
            save_links: self.save_links,
            max_links: self.max_links,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithOutputPath> {
    pub fn url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        ScrapeConfigBuilder {
            url: Some(normalized_url),
            output_path: self.output_path,
            request_timeout_secs: self.request_timeout_secs,
            render_timeout_secs: self.render_timeout_secs,
            settle_delay_secs: self.settle_delay_secs,
            preview_chars: self.preview_chars,
            headless: self.headless,
            save_raw_html: self.save_raw_html,
            save_links: self.save_links,
            max_links: self.max_links,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithUrl> {
    pub fn build(self) -> Result<ScrapeConfig> {
        // Enforce headless mode in release builds for production safety
        #[cfg(not(debug_assertions))]
        let headless = if !self.headless {
            // In release builds, override headed mode and force headless
            log::warn!(
                "Forcing headless mode in release build. \
                Headed mode is only available in debug builds for development."
            );
            true
        } else {
            self.headless
        };

        #[cfg(debug_assertions)]
        let headless = self.headless;

        Ok(ScrapeConfig {
            url: self.url.ok_or_else(|| anyhow!("url is required"))?,
            output_path: self
                .output_path
                .ok_or_else(|| anyhow!("output_path is required"))?,
            request_timeout_secs: self.request_timeout_secs,
            render_timeout_secs: self.render_timeout_secs,
            settle_delay_secs: self.settle_delay_secs,
            preview_chars: self.preview_chars,
            headless,
            save_raw_html: self.save_raw_html,
            save_links: self.save_links,
            max_links: self.max_links,
            chrome_data_dir: None,
        })
    }
}

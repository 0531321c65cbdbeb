//! Core types for scrape operations.
//!
//! This module contains the result document, the error type callers see,
//! and its mapping to process exit codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::page_extractor::RelatedLink;

/// Error type for scrape operations
///
/// Two cases matter to callers: the rendering environment never came up
/// (nothing was attempted against the target), or something after that
/// point failed. Everything downstream of a healthy browser collapses
/// into `Failed`; the stage that broke is in the message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScrapeError {
    /// No usable browser: discovery, download, and launch all came up empty
    #[error("Browser unavailable: {0}")]
    BrowserUnavailable(String),
    /// The scrape itself failed: navigation, rendering, extraction, or persistence
    #[error("Scrape failed: {0}")]
    Failed(String),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Failed(format!("{err:#}"))
    }
}

impl ScrapeError {
    /// Wrap a browser acquisition failure, preserving its error chain.
    #[must_use]
    pub fn browser_unavailable(err: anyhow::Error) -> Self {
        Self::BrowserUnavailable(format!("{err:#}"))
    }

    /// Process exit code for this error.
    ///
    /// 2 means the environment is missing its browser and no page was
    /// ever contacted; 1 means the scrape ran and failed. Success is 0.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::BrowserUnavailable(_) => 2,
            Self::Failed(_) => 1,
        }
    }
}

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// The outcome of a successful scrape
///
/// Everything extracted from the rendered page plus where the text landed
/// on disk. The text here is byte-for-byte what the output file holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedDocument {
    pub url: String,
    pub title: String,
    pub text: String,
    pub output_path: PathBuf,
    pub fetched_at: DateTime<Utc>,
    /// Same-host links captured from the page; empty unless link capture
    /// was enabled in the config.
    pub related_links: Vec<RelatedLink>,
}

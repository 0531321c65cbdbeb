//! Scrape orchestration.
//!
//! `DocScraper` runs the whole pipeline for one page: acquire a browser
//! session, navigate, wait for the client-side render, extract the
//! rendered content, persist it, and report. The session is always
//! released before the result is returned, on failure as well as success.

use anyhow::Result;
use log::{info, warn};
use std::future::Future;
use std::time::Duration;

// Sub-modules
mod render_wait;
mod summary;
mod types;

// Re-exports for public API
pub use summary::RunSummary;
pub use types::{ScrapeError, ScrapeResult, ScrapedDocument};

use crate::browser::BrowserSession;
use crate::config::ScrapeConfig;
use crate::content_saver::{save_html_content, save_related_links, save_text_content};
use crate::page_extractor::{extract_related_links, extract_title, extract_visible_text};

/// Single-page documentation scraper
///
/// Owns its config; each `fetch_and_save()` call runs one complete
/// scrape with a fresh browser session.
pub struct DocScraper {
    config: ScrapeConfig,
}

impl DocScraper {
    #[must_use]
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetch the configured page, render it, extract the text, save it,
    /// and print the run summary.
    ///
    /// A `BrowserUnavailable` error means no browser could be brought up
    /// and the target was never contacted. Any later failure comes back
    /// as `Failed`, and in that case no output file has been written:
    /// persistence only starts after extraction has fully succeeded.
    pub async fn fetch_and_save(&self) -> ScrapeResult<ScrapedDocument> {
        info!("🔍 Fetching {}", self.config.url());

        let session = BrowserSession::acquire(&self.config)
            .await
            .map_err(ScrapeError::browser_unavailable)?;

        let outcome = self.run_in_session(&session).await;

        // The session is released whichever way the run went. Cleanup
        // problems are logged inside shutdown and never override the
        // scrape outcome.
        session.shutdown().await;

        let document = outcome?;

        let summary = RunSummary::from_document(&document, self.config.preview_chars());
        summary.print();

        Ok(document)
    }

    /// Everything between session acquisition and release.
    async fn run_in_session(&self, session: &BrowserSession) -> Result<ScrapedDocument> {
        let url = self.config.url();
        let page = session.new_blank_page().await?;

        // Navigate to the target page
        with_page_timeout(
            async {
                page.goto(url).await.map_err(|e| anyhow::anyhow!("{e}"))
            },
            self.config.request_timeout_secs(),
            "Page navigation",
        )
        .await?;

        // Wait for the load event; a page still loading past this bound
        // fails the run instead of hanging it
        info!("⏳ Rendering JavaScript content...");
        with_page_timeout(
            async {
                page.wait_for_navigation()
                    .await
                    .map_err(|e| anyhow::anyhow!("{e}"))
            },
            self.config.render_timeout_secs(),
            "Page render",
        )
        .await?;

        // Load fired; now wait for the client-side render to produce
        // content, then settle
        render_wait::wait_for_render(&page, self.config.settle_delay_secs()).await?;

        // Extract everything before writing anything
        let text = extract_visible_text(&page).await?;
        let title = extract_title(&page).await?;
        info!(
            "📊 Extracted {} characters from '{}'",
            text.chars().count(),
            title
        );

        let related_links = if self.config.save_links() {
            extract_related_links(&page, url, self.config.max_links()).await?
        } else {
            Vec::new()
        };

        let raw_html = if self.config.save_raw_html() {
            Some(
                page.content()
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to get page content: {e}"))?,
            )
        } else {
            None
        };

        if text.is_empty() {
            warn!("Extracted text is empty; the page may not have rendered");
        }

        // Persist: the text file is the contract, siblings follow it
        let output_path = self.config.output_path();
        save_text_content(&text, output_path).await?;
        info!("✅ Content saved to {}", output_path.display());

        if let Some(html) = &raw_html {
            save_html_content(html, &self.config.html_output_path()).await?;
        }

        if self.config.save_links() {
            save_related_links(&related_links, url, &self.config.links_output_path()).await?;
        }

        Ok(ScrapedDocument {
            url: url.to_string(),
            title,
            text,
            output_path: output_path.to_path_buf(),
            fetched_at: chrono::Utc::now(),
            related_links,
        })
    }
}

/// Wrap an async page operation with an explicit timeout.
///
/// Returns an error naming the operation when the bound is hit, so a
/// timeout on navigation reads differently from one on render.
async fn with_page_timeout<F, T>(operation: F, timeout_secs: u64, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

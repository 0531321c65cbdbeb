pub mod browser;
pub mod config;
pub mod content_saver;
pub mod page_extractor;
pub mod scrape_engine;
pub mod utils;

pub use browser::{BrowserSession, download_managed_browser, find_browser_executable};
pub use config::ScrapeConfig;
pub use content_saver::{LinksDocument, save_html_content, save_related_links, save_text_content};
pub use page_extractor::RelatedLink;
pub use scrape_engine::{DocScraper, RunSummary, ScrapeError, ScrapeResult, ScrapedDocument};

/// Run one scrape with the given config.
pub async fn scrape(config: ScrapeConfig) -> ScrapeResult<ScrapedDocument> {
    let scraper = DocScraper::new(config);
    scraper.fetch_and_save().await
}

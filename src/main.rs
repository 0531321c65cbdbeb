// Documentation scraper CLI
//
// Fetches the Cortex Cloud onboarding API documentation in headless
// Chromium, extracts the rendered text, and saves it to the working
// directory. Exit code 2 means no browser could be brought up; 1 means
// the scrape itself failed.

use std::process::ExitCode;

use docscrape::{DocScraper, ScrapeConfig, ScrapeError};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("chromiumoxide::handler", log::LevelFilter::Off)
        .filter_module("chromiumoxide::conn", log::LevelFilter::Off)
        .init();

    log::info!("🔍 Scraping Cortex Cloud API documentation...");

    let config = ScrapeConfig::default();
    let scraper = DocScraper::new(config);

    match scraper.fetch_and_save().await {
        Ok(_) => {
            log::info!("✅ Scrape completed!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("❌ Scrape failed: {e}");
            if matches!(e, ScrapeError::BrowserUnavailable(_)) {
                log::error!(
                    "Install Chrome or Chromium, or point CHROMIUM_PATH at an executable"
                );
            }
            ExitCode::from(e.exit_code())
        }
    }
}

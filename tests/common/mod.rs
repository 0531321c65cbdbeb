//! Test utilities and helper functions for the docscrape test suite

use anyhow::Result;
use mockito::{Mock, Server};
use std::path::Path;
use tempfile::TempDir;

use docscrape::ScrapeConfig;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Creates an HTML document whose body is filled in by JavaScript
///
/// The page ships with an empty container; a deferred script writes the
/// given text into it after load. A scraper that reads the raw response
/// body sees nothing, one that renders sees `rendered_text`.
#[allow(dead_code)]
pub fn create_js_rendered_html(title: &str, rendered_text: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <div id="app"></div>
    <script>
        setTimeout(() => {{
            document.getElementById('app').textContent = {rendered_text:?};
        }}, 300);
    </script>
</body>
</html>"#
    )
}

/// Sets up a mock HTTP server with predefined responses
#[allow(dead_code)]
pub async fn setup_mock_server() -> Result<mockito::ServerGuard> {
    let server = Server::new_async().await;
    Ok(server)
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that stalls mid-response
///
/// Sends headers and a partial body, then sleeps well past any test
/// timeout before finishing. Navigation against this endpoint can only
/// end via the scraper's own timeouts.
#[allow(dead_code)]
pub async fn create_stalled_mock(server: &mut Server, path: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_chunked_body(|writer| {
            writer.write_all(b"<!DOCTYPE html><html><body>")?;
            std::thread::sleep(std::time::Duration::from_secs(60));
            writer.write_all(b"</body></html>")
        })
        .create_async()
        .await
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &Server, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

/// Creates a scrape configuration with short timeouts for tests
#[allow(dead_code)]
pub fn create_test_config(output_path: &Path, url: &str) -> ScrapeConfig {
    ScrapeConfig::builder()
        .output_path(output_path.to_path_buf())
        .url(url)
        .request_timeout_secs(10)
        .render_timeout_secs(10)
        .settle_delay_secs(0)
        .build()
        .expect("Failed to create test config")
}

/// Verifies that a file exists and has content
#[allow(dead_code)]
pub async fn assert_file_exists_with_content(path: &Path) -> Result<String> {
    assert!(path.exists(), "File does not exist: {path:?}");
    let content = tokio::fs::read_to_string(path).await?;
    assert!(!content.is_empty(), "File is empty: {path:?}");
    Ok(content)
}

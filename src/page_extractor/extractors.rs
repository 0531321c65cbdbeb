//! Page data extraction functions
//!
//! Extraction happens inside the page via JavaScript evaluation, so the
//! results reflect what the browser actually rendered rather than what
//! the server originally sent.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::{Deserialize, Serialize};

use super::js_scripts::{LINKS_SCRIPT, TEXT_SCRIPT};
use crate::utils::{is_same_host, is_valid_url};

/// A same-host link captured from the rendered page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedLink {
    pub url: String,
    pub text: String,
}

/// Extract the rendered visible text of the page
pub async fn extract_visible_text(page: &Page) -> Result<String> {
    let text_value = page
        .evaluate(TEXT_SCRIPT)
        .await
        .context("Failed to execute text extraction script")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("Failed to get text value: {e}"))?;

    if let serde_json::Value::String(text) = text_value {
        Ok(text)
    } else {
        Ok(String::new())
    }
}

/// Extract the document title
pub async fn extract_title(page: &Page) -> Result<String> {
    let title_value = page
        .evaluate("document.title")
        .await
        .context("Failed to evaluate document.title")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("Failed to get page title: {e}"))?;

    if let serde_json::Value::String(title) = title_value {
        Ok(title)
    } else {
        Ok(String::new())
    }
}

/// Extract links from the page and keep the same-host neighborhood
///
/// The page resolves and deduplicates its anchors; this side drops
/// anything off-host or non-http and applies the cap.
pub async fn extract_related_links(
    page: &Page,
    base_url: &str,
    max_links: usize,
) -> Result<Vec<RelatedLink>> {
    let js_result = page
        .evaluate(LINKS_SCRIPT)
        .await
        .context("Failed to execute links extraction script")?;

    let links: Vec<RelatedLink> = match js_result.into_value::<serde_json::Value>() {
        Ok(value) => {
            serde_json::from_value(value).context("Failed to parse links from JS result")?
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to get links value: {e}")),
    };

    Ok(filter_related_links(links, base_url, max_links))
}

/// Keep valid same-host links, capped, preserving document order.
pub(crate) fn filter_related_links(
    links: Vec<RelatedLink>,
    base_url: &str,
    max_links: usize,
) -> Vec<RelatedLink> {
    links
        .into_iter()
        .filter(|link| is_valid_url(&link.url) && is_same_host(&link.url, base_url))
        .take(max_links)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> RelatedLink {
        RelatedLink {
            url: url.to_string(),
            text: String::from("link"),
        }
    }

    #[test]
    fn keeps_same_host_links_in_order() {
        let base = "https://docs.example.com/r/start";
        let links = vec![
            link("https://docs.example.com/r/a"),
            link("https://other.example.com/r/b"),
            link("https://docs.example.com/r/c"),
        ];

        let filtered = filter_related_links(links, base, 20);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].url, "https://docs.example.com/r/a");
        assert_eq!(filtered[1].url, "https://docs.example.com/r/c");
    }

    #[test]
    fn applies_link_cap() {
        let base = "https://docs.example.com/";
        let links: Vec<RelatedLink> = (0..50)
            .map(|i| link(&format!("https://docs.example.com/page/{i}")))
            .collect();

        let filtered = filter_related_links(links, base, 20);
        assert_eq!(filtered.len(), 20);
        assert_eq!(filtered[19].url, "https://docs.example.com/page/19");
    }

    #[test]
    fn drops_invalid_urls() {
        let base = "https://docs.example.com/";
        let links = vec![
            link("javascript:void(0)"),
            link("mailto:docs@example.com"),
            link("https://docs.example.com/kept"),
        ];

        let filtered = filter_related_links(links, base, 20);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://docs.example.com/kept");
    }
}

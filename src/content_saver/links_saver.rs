//! Related-links persistence
//!
//! Optional sibling output recording the same-host links captured from the
//! rendered page, with enough context (source URL, timestamp) to make the
//! file meaningful on its own.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::text_saver::ensure_parent_dir;
use crate::page_extractor::RelatedLink;

/// On-disk shape of the related-links file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksDocument {
    pub source_url: String,
    pub fetched_at: DateTime<Utc>,
    pub links: Vec<RelatedLink>,
}

/// Save captured related links as pretty-printed JSON.
pub async fn save_related_links(
    links: &[RelatedLink],
    source_url: &str,
    path: &Path,
) -> Result<()> {
    let document = LinksDocument {
        source_url: source_url.to_string(),
        fetched_at: Utc::now(),
        links: links.to_vec(),
    };

    let json = serde_json::to_string_pretty(&document)
        .context("Failed to serialize related links document")?;

    ensure_parent_dir(path).await?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write related links to {}", path.display()))?;

    log::debug!(
        "Saved {} related links to {}",
        document.links.len(),
        path.display()
    );

    Ok(())
}

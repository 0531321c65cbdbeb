//! Raw HTML persistence
//!
//! Optional sibling output holding the serialized DOM as the browser left
//! it after rendering. Useful when the extracted text looks wrong and the
//! page structure needs inspecting.

use anyhow::{Context, Result};
use std::path::Path;

use super::text_saver::ensure_parent_dir;

/// Save the rendered page HTML next to the text output.
pub async fn save_html_content(html: &str, path: &Path) -> Result<()> {
    ensure_parent_dir(path).await?;

    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write HTML content to {}", path.display()))?;

    log::debug!(
        "Saved {} bytes of rendered HTML to {}",
        html.len(),
        path.display()
    );

    Ok(())
}

//! Rendered-text persistence
//!
//! The text file is the contract of a scrape run: it is only ever written
//! after extraction has succeeded, and a rerun overwrites it in place
//! rather than appending.

use anyhow::{Context, Result};
use std::path::Path;

/// Save extracted text as UTF-8, overwriting any previous run's file.
pub async fn save_text_content(text: &str, path: &Path) -> Result<()> {
    ensure_parent_dir(path).await?;

    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write text content to {}", path.display()))?;

    log::debug!(
        "Saved {} bytes of rendered text to {}",
        text.len(),
        path.display()
    );

    Ok(())
}

/// Create the parent directory of `path` if it has a non-trivial one.
///
/// A bare filename has `Some("")` as its parent; creating that would fail,
/// so it is treated the same as no parent at all.
pub(crate) async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

//! Page data extraction functions.
//!
//! This module provides functions for extracting rendered content from web
//! pages: visible text, the document title, and same-host related links.

// Sub-modules
pub mod extractors;
pub mod js_scripts;

// Re-exports for public API
pub use extractors::{RelatedLink, extract_related_links, extract_title, extract_visible_text};

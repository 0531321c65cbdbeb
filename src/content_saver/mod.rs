//! Content saving utilities for the scrape outputs

// Module declarations
mod html_saver;
mod links_saver;
mod text_saver;

// Re-export public API from text_saver module
pub use text_saver::save_text_content;

// Re-export public API from html_saver module
pub use html_saver::save_html_content;

// Re-export public API from links_saver module
pub use links_saver::{LinksDocument, save_related_links};

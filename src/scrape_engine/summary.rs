//! Run summary reporting
//!
//! After a successful scrape the operator gets a console report: where the
//! text landed, how much of it there is, a bounded preview, and a quick
//! signal on whether it reads like API documentation at all.

use std::path::PathBuf;

use super::types::ScrapedDocument;

/// Console-facing summary of a completed scrape
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub url: String,
    pub title: String,
    pub output_path: PathBuf,
    /// Size of the extracted text in characters, not bytes
    pub char_count: usize,
    /// First `preview_chars` characters of the extracted text
    pub preview: String,
    /// Whether the text carries API-documentation markers
    pub looks_like_api_docs: bool,
}

impl RunSummary {
    /// Build the summary for a scraped document.
    #[must_use]
    pub fn from_document(document: &ScrapedDocument, preview_chars: usize) -> Self {
        Self {
            url: document.url.clone(),
            title: document.title.clone(),
            output_path: document.output_path.clone(),
            char_count: document.text.chars().count(),
            preview: preview_of(&document.text, preview_chars),
            looks_like_api_docs: contains_api_keywords(&document.text),
        }
    }

    /// Print the summary to stdout.
    ///
    /// This is operator output, not logging; it goes to stdout unconditionally
    /// while log lines stay subject to the log filter.
    pub fn print(&self) {
        println!();
        println!("✅ Successfully scraped {} characters", self.char_count);
        println!("📄 Content saved to: {}", self.output_path.display());
        println!();
        println!("📖 Preview of scraped content:");
        println!("{}", "=".repeat(80));
        println!("{}", self.preview);
        println!("{}", "=".repeat(80));

        if self.looks_like_api_docs {
            println!("✅ Content appears to contain API documentation");
        } else {
            println!("⚠️  Content may not contain expected API documentation");
        }
    }
}

/// First `max_chars` characters of `text`.
///
/// Character-based so the cut never lands inside a multi-byte sequence
/// and the preview length does not depend on encoding.
fn preview_of(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Check for API-documentation markers.
///
/// "API" is matched case-sensitively: the acronym in running text is the
/// signal, while words like "rapid" must not trip it. "endpoint" is
/// matched case-insensitively since prose capitalizes it freely.
fn contains_api_keywords(text: &str) -> bool {
    text.contains("API") || text.to_lowercase().contains("endpoint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn document(text: &str) -> ScrapedDocument {
        ScrapedDocument {
            url: "https://docs.example.com/api".to_string(),
            title: "API Reference".to_string(),
            text: text.to_string(),
            output_path: PathBuf::from("out.txt"),
            fetched_at: Utc::now(),
            related_links: Vec::new(),
        }
    }

    #[test]
    fn preview_truncates_to_char_limit() {
        let text = "x".repeat(5000);
        assert_eq!(preview_of(&text, 1000).len(), 1000);
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        assert_eq!(preview_of("short text", 1000), "short text");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // Four characters, ten bytes
        let text = "日本語A";
        let preview = preview_of(text, 3);
        assert_eq!(preview.chars().count(), 3);
        assert_eq!(preview, "日本語");
    }

    #[test]
    fn char_count_is_character_based() {
        let summary = RunSummary::from_document(&document("héllo wörld"), 1000);
        assert_eq!(summary.char_count, 11);
    }

    #[test]
    fn api_keyword_is_case_sensitive() {
        assert!(contains_api_keywords("The API returns JSON"));
        assert!(!contains_api_keywords("a rapid response"));
        assert!(!contains_api_keywords("api in lowercase only"));
    }

    #[test]
    fn endpoint_keyword_is_case_insensitive() {
        assert!(contains_api_keywords("Each Endpoint accepts POST"));
        assert!(contains_api_keywords("ENDPOINT LISTING"));
        assert!(contains_api_keywords("the endpoint"));
    }

    #[test]
    fn unrelated_text_has_no_markers() {
        assert!(!contains_api_keywords("welcome to our cooking blog"));
    }

    #[test]
    fn summary_reflects_document() {
        let summary = RunSummary::from_document(&document("API endpoint docs"), 7);
        assert!(summary.looks_like_api_docs);
        assert_eq!(summary.preview, "API end");
        assert_eq!(summary.char_count, 17);
        assert_eq!(summary.title, "API Reference");
    }
}

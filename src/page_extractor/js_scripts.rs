//! JavaScript evaluation scripts
//!
//! This module contains the JavaScript code used to extract rendered
//! content from documentation pages.

/// JavaScript script to extract the rendered visible text
///
/// Uses `innerText` rather than `textContent` so hidden elements are
/// skipped and block boundaries come back as line breaks, which is what
/// a reader of the saved file expects.
pub const TEXT_SCRIPT: &str = r"
    (() => {
        return document.body ? document.body.innerText : '';
    })()
";

/// JavaScript script to extract links
///
/// Resolves every anchor against the current document URL so relative
/// hrefs come back absolute, keeps only http/https targets, and
/// deduplicates by URL in document order.
pub const LINKS_SCRIPT: &str = r"
    (() => {
        const seen = new Set();
        const related = [];

        for (const anchor of document.querySelectorAll('a[href]')) {
            const href = anchor.getAttribute('href');
            if (!href) continue;

            let resolved;
            try {
                resolved = new URL(href, window.location.href);
            } catch (e) {
                continue;
            }

            if (resolved.protocol !== 'http:' && resolved.protocol !== 'https:') {
                continue;
            }
            if (seen.has(resolved.href)) continue;

            seen.add(resolved.href);
            related.push({
                url: resolved.href,
                text: (anchor.textContent || '').trim()
            });
        }

        return related;
    })()
";

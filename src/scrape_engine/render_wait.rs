//! Render readiness detection
//!
//! `page.wait_for_navigation()` only waits for the HTTP response and load
//! event, not for JavaScript execution. On client-rendered documentation
//! portals the body is still empty at that point. This module polls the
//! page until the rendered content actually shows up, then applies a short
//! settle delay for late async DOM patches.

use anyhow::Result;
use chromiumoxide::Page;
use log::{debug, warn};
use std::time::{Duration, Instant};

use crate::utils::{READINESS_POLL_INTERVAL_MS, READINESS_POLL_MAX_SECS};

/// Wait for the rendered page content to appear, then settle.
///
/// Polls `document.readyState` and the body text at a fixed interval, up
/// to a bounded maximum. The poll expiring is not an error: the navigation
/// already succeeded, so extraction proceeds with whatever the page has.
/// A hung navigation is caught earlier by the render timeout.
pub(crate) async fn wait_for_render(page: &Page, settle_delay_secs: u64) -> Result<()> {
    let start = Instant::now();
    let max_wait = Duration::from_secs(READINESS_POLL_MAX_SECS);
    let poll_interval = Duration::from_millis(READINESS_POLL_INTERVAL_MS);

    debug!(
        "Waiting for rendered content (max {}s)",
        READINESS_POLL_MAX_SECS
    );

    let probe_script = r#"
        (function() {
            return {
                readyState: document.readyState,
                bodyTextLength: document.body ? document.body.innerText.trim().length : 0
            };
        })()
    "#;

    // Phase 1: poll until the document is complete and the body has text
    loop {
        if start.elapsed() >= max_wait {
            warn!(
                "Timeout waiting for rendered content after {}s, proceeding anyway",
                READINESS_POLL_MAX_SECS
            );
            break;
        }

        match page.evaluate(probe_script).await {
            Ok(result) => {
                if let Ok(value) = result.into_value::<serde_json::Value>() {
                    let ready_state = value.get("readyState").and_then(|v| v.as_str());
                    let body_text_length = value
                        .get("bodyTextLength")
                        .and_then(serde_json::Value::as_u64)
                        .unwrap_or(0);

                    if ready_state == Some("complete") && body_text_length > 0 {
                        debug!(
                            "Page ready after {:.2}s ({} chars of body text)",
                            start.elapsed().as_secs_f64(),
                            body_text_length
                        );
                        break;
                    }
                }
            }
            Err(e) => {
                debug!("Failed to check readyState: {e}, retrying");
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    // Phase 2: settle delay for content that keeps arriving after the
    // readiness markers are satisfied
    if settle_delay_secs > 0 {
        debug!("Settling for {settle_delay_secs}s to pick up late content");
        tokio::time::sleep(Duration::from_secs(settle_delay_secs)).await;
    }

    debug!(
        "Render wait complete after {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

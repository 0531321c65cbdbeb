//! Browser acquisition and session lifetime
//!
//! Finds or downloads a Chromium executable, launches it with stealth
//! configuration, and wraps the running instance in a session that owns
//! the CDP event handler task and the temporary profile directory.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use chromiumoxide::page::Page;
use futures::StreamExt;
use log::{error, info, trace, warn};
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tokio::task::{self, JoinHandle};

use crate::config::ScrapeConfig;
use crate::utils::constants::CHROME_USER_AGENT;

/// Locate a Chrome/Chromium executable on this machine.
///
/// `CHROMIUM_PATH` overrides everything; otherwise well-known install
/// locations are probed per platform, then `which` on Unix.
pub async fn find_browser_executable() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!(
                "Using browser from CHROMIUM_PATH environment variable: {}",
                path.display()
            );
            return Ok(path);
        }
        warn!(
            "CHROMIUM_PATH environment variable points to non-existent file: {}",
            path.display()
        );
    }

    let paths = if cfg!(target_os = "windows") {
        vec![
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"%PROGRAMFILES%\Google\Chrome\Application\chrome.exe",
            r"%PROGRAMFILES(X86)%\Google\Chrome\Application\chrome.exe",
            r"%LOCALAPPDATA%\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
            r"C:\Program Files (x86)\Chromium\Application\chrome.exe",
        ]
    } else if cfg!(target_os = "macos") {
        vec![
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Google Chrome Beta.app/Contents/MacOS/Google Chrome Beta",
            "/Applications/Google Chrome Dev.app/Contents/MacOS/Google Chrome Dev",
            "/Applications/Google Chrome Canary.app/Contents/MacOS/Google Chrome Canary",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "~/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "~/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        // Linux
        vec![
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/usr/local/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    for path_str in paths {
        let path = if path_str.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&path_str[2..])
            } else {
                continue;
            }
        } else if path_str.contains('%') && cfg!(target_os = "windows") {
            PathBuf::from(expand_windows_env_vars(path_str))
        } else {
            PathBuf::from(path_str)
        };

        if path.exists() {
            info!("Found browser at: {}", path.display());
            return Ok(path);
        }
    }

    // Last resort before the managed download: ask the shell
    if !cfg!(target_os = "windows") {
        for cmd in &["chromium", "chromium-browser", "google-chrome", "chrome"] {
            let output = Command::new("which").arg(cmd).output();

            if let Ok(output) = output
                && output.status.success()
            {
                let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path_str.is_empty() {
                    let path = PathBuf::from(path_str);
                    info!("Found browser using 'which' command: {}", path.display());
                    return Ok(path);
                }
            }
        }
    }

    warn!("No Chrome/Chromium executable found. Will download and use fetcher.");
    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

/// Expand `%VAR%` tokens in a Windows-style path.
///
/// Unset variables keep their literal `%VAR%` form, `%%` collapses to a
/// single `%`, and an unclosed `%` passes through unchanged.
fn expand_windows_env_vars(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('%') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('%') else {
            result.push('%');
            result.push_str(after);
            return result;
        };

        let name = &after[..end];
        if name.is_empty() {
            result.push('%');
        } else if let Ok(value) = std::env::var(name) {
            result.push_str(&value);
        } else {
            result.push('%');
            result.push_str(name);
            result.push('%');
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Download a Chromium build into the user cache and return its executable.
///
/// Fallback for machines with no local browser install.
pub async fn download_managed_browser() -> Result<PathBuf> {
    info!("Downloading managed Chromium browser...");

    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(|| {
            let fallback = std::env::temp_dir().join("docscrape_chrome_cache");
            warn!(
                "Could not determine user cache directory, using temp directory fallback: {}",
                fallback.display()
            );
            fallback
        })
        .join("docscrape")
        .join("chromium");

    std::fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .context("Failed to build fetcher options")?,
    );

    // The fetch is cached: a prior download at this path is reused
    let revision_info = fetcher.fetch().await.context("Failed to fetch browser")?;

    info!(
        "Downloaded Chromium to: {}",
        revision_info.folder_path.display()
    );

    Ok(revision_info.executable_path)
}

/// Launch a browser instance configured for the given scrape.
///
/// Finds or downloads Chrome/Chromium and launches it with stealth settings.
/// Returns the browser, the handler task driving its CDP connection, and the
/// temp profile directory if this launch created one (the caller must remove
/// it after the browser process has exited).
async fn launch_browser(config: &ScrapeConfig) -> Result<(Browser, JoinHandle<()>, Option<PathBuf>)> {
    let chrome_path = match find_browser_executable().await {
        Ok(path) => path,
        Err(_) => download_managed_browser().await?,
    };

    // Use the configured profile directory or create a throwaway one
    let (user_data_dir, owns_data_dir) = match config.chrome_data_dir() {
        Some(dir) => (dir.clone(), false),
        None => (
            std::env::temp_dir().join(format!("docscrape_chrome_{}", std::process::id())),
            true,
        ),
    };

    std::fs::create_dir_all(&user_data_dir).context("Failed to create user data directory")?;

    let mut config_builder = BrowserConfigBuilder::default()
        .request_timeout(Duration::from_secs(config.request_timeout_secs()))
        .window_size(1920, 1080)
        .user_data_dir(user_data_dir.clone())
        .chrome_executable(chrome_path);

    if config.headless() {
        config_builder = config_builder.headless_mode(HeadlessMode::default());
    } else {
        config_builder = config_builder.with_head();
    }

    // Stealth and hardening flags
    config_builder = config_builder
        .arg(format!("--user-agent={}", CHROME_USER_AGENT))
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--disable-infobars")
        .arg("--disable-notifications")
        .arg("--disable-print-preview")
        .arg("--disable-desktop-notifications")
        .arg("--disable-software-rasterizer")
        .arg("--disable-web-security")
        .arg("--disable-features=IsolateOrigins,site-per-process")
        .arg("--disable-setuid-sandbox")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--no-sandbox")
        .arg("--ignore-certificate-errors")
        .arg("--enable-features=NetworkService,NetworkServiceInProcess")
        .arg("--disable-extensions")
        .arg("--disable-popup-blocking")
        .arg("--disable-background-networking")
        .arg("--disable-background-timer-throttling")
        .arg("--disable-backgrounding-occluded-windows")
        .arg("--disable-breakpad")
        .arg("--disable-component-extensions-with-background-pages")
        .arg("--disable-features=TranslateUI")
        .arg("--disable-hang-monitor")
        .arg("--disable-ipc-flooding-protection")
        .arg("--disable-prompt-on-repost")
        .arg("--metrics-recording-only")
        .arg("--password-store=basic")
        .arg("--use-mock-keychain")
        .arg("--hide-scrollbars")
        .arg("--mute-audio");

    let browser_config = config_builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    info!("Launching browser");
    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    let handler_task = task::spawn(async move {
        while let Some(h) = handler.next().await {
            if let Err(e) = h {
                let error_msg = e.to_string();

                // Chrome emits CDP events chromiumoxide cannot deserialize;
                // these are harmless (mattsse/chromiumoxide#167, #229)
                let is_benign_serialization_error = error_msg
                    .contains("data did not match any variant of untagged enum Message")
                    || error_msg.contains("Failed to deserialize WS response");

                if is_benign_serialization_error {
                    trace!("Suppressed benign CDP serialization error: {error_msg}");
                } else {
                    error!("Browser handler error: {e:?}");
                }
            }
        }
        info!("Browser event handler task completed");
    });

    Ok((browser, handler_task, owns_data_dir.then_some(user_data_dir)))
}

/// A running browser scoped to one scrape.
///
/// Owns the browser process, the handler task driving its CDP connection,
/// and (unless the config supplied a profile directory) the temp profile
/// on disk. `shutdown()` releases all three in order; `Drop` is only the
/// backstop for early exits.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserSession {
    /// Launch a browser for this config and wrap it in a session.
    pub async fn acquire(config: &ScrapeConfig) -> Result<Self> {
        let (browser, handler, user_data_dir) = launch_browser(config).await?;
        Ok(Self {
            browser,
            handler,
            user_data_dir,
        })
    }

    /// Open a blank page in this session.
    ///
    /// Pages start at about:blank and navigate from there; this keeps the
    /// first real navigation observable to the caller.
    pub async fn new_blank_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .context("Failed to create blank page")
    }

    /// Close the browser and release everything the session owns.
    ///
    /// Order matters: close, then wait for the process to exit, then remove
    /// the temp profile. Chrome holds file locks until it has fully exited,
    /// and Windows will refuse to delete the profile before then. Failures
    /// are logged rather than propagated so cleanup can never mask the
    /// outcome of the scrape itself.
    pub async fn shutdown(mut self) {
        info!("Shutting down browser session");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }

        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
        }

        self.cleanup_temp_dir();
        // Drop aborts the handler task once it falls out of scope here
    }

    /// Remove the temp profile directory if this session owns one.
    ///
    /// Uses blocking `std::fs::remove_dir_all()` because this is also
    /// called from Drop context where async is not available.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            info!("Cleaning up temp directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop() kills the Chrome process if it is still running

        // Cleanup temp directory (fallback if shutdown() wasn't called)
        if self.user_data_dir.is_some() {
            warn!("BrowserSession dropped without explicit shutdown - removing temp dir in Drop");
            self.cleanup_temp_dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::expand_windows_env_vars;

    #[test]
    fn test_unset_variable_is_preserved() {
        let input = r"%DOCSCRAPE_UNSET_VAR_XYZ%\Chrome\chrome.exe";
        assert_eq!(expand_windows_env_vars(input), input);
    }

    #[test]
    fn test_double_percent_collapses() {
        assert_eq!(expand_windows_env_vars(r"C:\a%%b"), r"C:\a%b");
    }

    #[test]
    fn test_unclosed_percent_passes_through() {
        assert_eq!(expand_windows_env_vars(r"C:\a%b"), r"C:\a%b");
    }

    #[test]
    fn test_plain_path_unchanged() {
        let input = r"C:\Program Files\Chromium\Application\chrome.exe";
        assert_eq!(expand_windows_env_vars(input), input);
    }
}

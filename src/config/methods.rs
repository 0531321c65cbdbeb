//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::ScrapeConfigBuilder;

// Methods available for all states since every one of these is optional
impl<State> ScrapeConfigBuilder<State> {
    /// Set the timeout for the initial page navigation
    ///
    /// # Arguments
    /// * `timeout_secs` - Timeout in seconds (default: 30)
    #[must_use]
    pub fn request_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.request_timeout_secs = timeout_secs;
        self
    }

    /// Set the timeout for the render wait after navigation
    ///
    /// Pages that have not fired their load event within this bound fail
    /// the run rather than hang it.
    ///
    /// # Arguments
    /// * `timeout_secs` - Timeout in seconds (default: 20)
    #[must_use]
    pub fn render_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.render_timeout_secs = timeout_secs;
        self
    }

    /// Set the settle delay applied after the page reports ready
    ///
    /// # Arguments
    /// * `delay_secs` - Delay in seconds (default: 3)
    #[must_use]
    pub fn settle_delay_secs(mut self, delay_secs: u64) -> Self {
        self.settle_delay_secs = delay_secs;
        self
    }

    /// Set how many characters of extracted text the summary preview shows
    #[must_use]
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Set browser headless mode (visible vs invisible browser window)
    ///
    /// Defaults to headless, which is the only mode that works in
    /// containers and CI. Headed mode exists for watching a misbehaving
    /// page during development.
    ///
    /// **Headless mode is enforced in release builds.** Any attempt to
    /// enable headed mode there is overridden with a logged warning.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Also save the raw rendered HTML next to the text output
    ///
    /// Default: false
    #[must_use]
    pub fn save_raw_html(mut self, save: bool) -> Self {
        self.save_raw_html = save;
        self
    }

    /// Also save same-host related links as JSON next to the text output
    ///
    /// Default: false
    #[must_use]
    pub fn save_links(mut self, save: bool) -> Self {
        self.save_links = save;
        self
    }

    /// Set the cap on captured related links
    ///
    /// # Arguments
    /// * `max` - Maximum number of links kept (default: 20)
    #[must_use]
    pub fn max_links(mut self, max: usize) -> Self {
        self.max_links = max;
        self
    }
}

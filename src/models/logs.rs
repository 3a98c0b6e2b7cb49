use crate::api::{ApiResult, LogQuery, MedicalBackend};
use crate::types::LogLevel;
use thiserror::Error;
use url::Url;

/// Replaces the log text when the service could not be reached.
pub const LOGS_UNAVAILABLE: &str = "⚠️ Unable to load logs from backend.";
/// Shown in place of the log text while a fetch is in flight.
pub const LOADING_PLACEHOLDER: &str = "Loading logs...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("limit must be a non-negative whole number, got {0:?}")]
    InvalidLimit(String),
}

/// Opens a URL as a fresh browser navigation.
pub trait Navigator {
    fn open_in_new_tab(&self, url: &Url);
}

/// Filter state, displayed log text and busy flag of the log page.
#[derive(Clone, Debug, PartialEq)]
pub struct LogConsole {
    filters: LogQuery,
    text: String,
    busy: bool,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConsole {
    pub fn new() -> Self {
        Self {
            filters: LogQuery::default(),
            text: String::new(),
            busy: false,
        }
    }

    // ---------------
    // Filters
    // ---------------

    pub fn filters(&self) -> &LogQuery {
        &self.filters
    }

    /// Sets the limit from the raw field text. Blank clears it; anything that
    /// is not a `u32` clears it and is reported.
    pub fn set_limit(&mut self, raw: &str) -> Result<(), FilterError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.filters.limit = None;
            return Ok(());
        }
        match trimmed.parse::<u32>() {
            Ok(limit) => {
                self.filters.limit = Some(limit);
                Ok(())
            }
            Err(_) => {
                self.filters.limit = None;
                Err(FilterError::InvalidLimit(raw.to_string()))
            }
        }
    }

    pub fn set_level(&mut self, level: Option<LogLevel>) {
        self.filters.level = level;
    }

    /// Level picker value: `""` is "All", unknown tags fall back to "All".
    pub fn set_level_tag(&mut self, tag: &str) {
        self.filters.level = tag.parse().ok();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.filters.search = (!search.is_empty()).then_some(search);
    }

    // ---------------
    // Output
    // ---------------

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last response body (or failure notice), empty while loading.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// What the output pane shows.
    pub fn display_text(&self) -> &str {
        if self.busy { LOADING_PLACEHOLDER } else { &self.text }
    }

    // ---------------
    // Fetch cycle
    // ---------------

    /// Clears the old text, marks the console busy and returns the query to send.
    pub fn begin_fetch(&mut self) -> LogQuery {
        self.text.clear();
        self.busy = true;
        self.filters.clone()
    }

    /// Stores the fetched body verbatim, or the failure notice.
    pub fn settle_fetch(&mut self, outcome: ApiResult<String>) {
        self.text = match outcome {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "log fetch failed");
                LOGS_UNAVAILABLE.to_string()
            }
        };
        self.busy = false;
    }

    pub async fn fetch<B>(&mut self, backend: &B)
    where
        B: MedicalBackend + ?Sized,
    {
        let query = self.begin_fetch();
        let outcome = backend.fetch_logs(&query).await;
        self.settle_fetch(outcome);
    }

    /// Opens the download variant of the current query in a new tab. The
    /// response is left entirely to the browser.
    pub fn download<B, N>(&self, backend: &B, navigator: &N) -> Url
    where
        B: MedicalBackend + ?Sized,
        N: Navigator + ?Sized,
    {
        let url = backend.download_url(&self.filters);
        tracing::info!(%url, "opening log download");
        navigator.open_in_new_tab(&url);
        url
    }
}

use tracing::debug;

use crate::client::ConcertClient;
use crate::filter::filter_concerts;
use crate::model::{Concert, ConcertListResult};

/// Search state for a concert listing page.
///
/// Holds the current query and the most recent fetch outcome. The visible
/// list is always derived from the two, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcertView {
    query: String,
    last_result: Option<ConcertListResult>,
    in_flight: bool,
}

impl ConcertView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The outcome of the last completed fetch, if any.
    pub fn last_result(&self) -> Option<&ConcertListResult> {
        self.last_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Whether a fetch should be issued now.
    ///
    /// False while a fetch is in flight or once concerts have been loaded.
    /// A failed fetch or an empty list leaves the view eligible for another
    /// attempt.
    pub fn should_fetch(&self) -> bool {
        !self.in_flight && self.concerts().is_empty()
    }

    pub fn begin_fetch(&mut self) {
        self.in_flight = true;
    }

    /// Store a fresh result, replacing the previous one.
    pub fn finish_fetch(&mut self, result: ConcertListResult) {
        self.in_flight = false;
        self.last_result = Some(result);
    }

    /// Fetch through `client` unless [`should_fetch`](Self::should_fetch)
    /// says otherwise. Returns whether a fetch was issued.
    ///
    /// The view is mutably borrowed for the whole fetch, so the in-flight
    /// flag is left alone here; dropping the future leaves the view as it was.
    pub async fn refresh(&mut self, client: &ConcertClient) -> bool {
        if !self.should_fetch() {
            debug!(loading = self.in_flight, "skipping concert fetch");
            return false;
        }
        let result = client.fetch_concerts().await;
        self.finish_fetch(result);
        true
    }

    /// Every loaded concert, regardless of the query.
    pub fn concerts(&self) -> &[Concert] {
        self.last_result
            .as_ref()
            .map(ConcertListResult::data)
            .unwrap_or_default()
    }

    /// The loaded concerts matching the current query.
    pub fn visible(&self) -> Vec<&Concert> {
        filter_concerts(self.concerts(), &self.query)
    }

    /// Message of the last fetch, when it failed.
    pub fn error(&self) -> Option<&str> {
        self.last_result.as_ref().and_then(ConcertListResult::error)
    }
}

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::fetch::{self, ReqwestTransport, Transport, DEFAULT_ENDPOINT};
use crate::model::{Concert, ConcertListResult};

/// The main entry point for fetching concert listings.
///
/// `ConcertClient` pairs an endpoint with a [`Transport`]. By default it
/// talks to `https://apis.is/concerts` through a [`reqwest::Client`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use concerts_is::{filter_concerts, ConcertClient};
///
/// let client = ConcertClient::new();
/// let result = client.fetch_concerts().await;
/// for concert in filter_concerts(result.data(), "sinfó") {
///     println!("{}", concert.title());
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct ConcertClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl ConcertClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_transport(ReqwestTransport::new(client))
    }

    /// Create a new client that issues its requests through `transport`.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }

    /// Point the client at a different endpoint serving the same envelope.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full concert list.
    ///
    /// Every failure, whether transport, status or decode, is reported as a
    /// [`RemoteError`](crate::RemoteError).
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_concerts(&self) -> Result<Vec<Concert>> {
        fetch::get_concerts(self.transport.as_ref(), &self.endpoint).await
    }

    /// Fetch the full concert list as a [`ConcertListResult`].
    pub async fn fetch_concerts(&self) -> ConcertListResult {
        self.get_concerts().await.into()
    }
}

impl Default for ConcertClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConcertClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcertClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

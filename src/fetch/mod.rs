mod transport;

pub use transport::{HttpResponse, ReqwestTransport, Transport};

use tracing::{debug, warn};

use crate::error::{RemoteError, Result};
use crate::model::{Concert, ConcertEnvelope};

pub(crate) const DEFAULT_ENDPOINT: &str = "https://apis.is/concerts";

/// Request the concert list from `url` and decode it.
pub(crate) async fn get_concerts(transport: &dyn Transport, url: &str) -> Result<Vec<Concert>> {
    debug!(url, "fetching concerts");

    let response = transport.get(url).await.inspect_err(|e| {
        warn!(url, error = %e, "concert request failed");
    })?;

    parse_concerts(response)
}

/// Validate the status and decode the `{ "results": [...] }` envelope.
///
/// Only status 200 counts as success; the body of any other response is
/// never inspected.
pub(crate) fn parse_concerts(response: HttpResponse) -> Result<Vec<Concert>> {
    if response.status != 200 {
        warn!(status = response.status, "unexpected status for concert list");
        return Err(RemoteError::status(response.status, &response.status_text));
    }

    let envelope: ConcertEnvelope = serde_json::from_str(&response.body).inspect_err(|e| {
        warn!(error = %e, "failed to decode concert list");
    })?;

    debug!(count = envelope.results.len(), "decoded concert list");
    Ok(envelope.results)
}

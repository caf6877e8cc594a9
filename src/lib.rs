//! Fetch Icelandic concert listings from [apis.is](https://apis.is/concerts)
//! and search them by name.

pub use client::ConcertClient;
pub use error::{RemoteError, Result};
pub use fetch::{HttpResponse, ReqwestTransport, Transport};
pub use filter::{filter_concerts, name_matches};
pub use model::*;
pub use view::ConcertView;

mod client;
mod error;
mod fetch;
mod filter;
mod model;
mod view;

/// Fetch the concert list from the default endpoint with a default client.
pub async fn fetch_concerts() -> ConcertListResult {
    ConcertClient::new().fetch_concerts().await
}

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Raw response to a single GET
#[derive(Debug)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// 4xx or 5xx
    pub fn is_error_status(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    concat!("ImageFetch/", env!("CARGO_PKG_VERSION"))
}

/// Build the HTTP client shared by every request in a run
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(get_user_agent())
        .build()
}

/// GET a URL and read the whole body.
///
/// Only transport failures are errors; the status is left for the caller.
pub async fn fetch(client: &Client, url: &str) -> reqwest::Result<FetchedResponse> {
    let response = client.get(url).send().await?;

    let status = response.status();
    // header bytes outside visible ASCII are kept (lossily) so the prefix check still runs
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let body = response.bytes().await?.to_vec();

    Ok(FetchedResponse {
        status,
        content_type,
        body,
    })
}

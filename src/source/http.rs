//! HTTP source for the country API.

use crate::model::{Country, FetchError};
use crate::source::decode::{api_error, flatten_records, parse_body};
use reqwest::blocking::{Client, Request};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Default endpoint returning every country.
pub const DEFAULT_ENDPOINT: &str = "https://countryapi.io/api/all";

/// One-shot GET against the country API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpSource {
    /// Build a source for `endpoint`.
    ///
    /// Without an API key the request carries no `Authorization` header;
    /// whether that is accepted is up to the API.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the HTTP client cannot be created.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    /// URL the list is fetched from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the GET request with bearer auth and JSON content type.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` for an unusable endpoint URL.
    pub fn request(&self) -> Result<Request, FetchError> {
        let mut builder = self
            .client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        Ok(builder.build()?)
    }

    /// Perform the request and decode the response.
    ///
    /// # Errors
    ///
    /// - `Transport` for connect/TLS/timeout failures and non-success statuses
    /// - `Api` when the body carries a `message`
    /// - `Decode` when a successful response is not a usable JSON object
    pub fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        info!(endpoint = %self.endpoint, authenticated = self.api_key.is_some(), "Fetching countries");
        let request = self.request()?;
        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = %status, bytes = body.len(), "Country response received");
        classify_response(status, &body)
    }
}

/// Turn a status and body into records or the error to display.
///
/// An API `message` wins over the status code, so a 401/429 with a
/// message shows the message. A non-success status with no message is a
/// transport error.
pub fn classify_response(status: StatusCode, body: &str) -> Result<Vec<Country>, FetchError> {
    let value = match parse_body(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => return Err(status_error(status)),
        Err(err) => return Err(err),
    };

    if let Some(err) = api_error(&value) {
        return Err(err);
    }

    if !status.is_success() {
        return Err(status_error(status));
    }

    flatten_records(value)
}

fn status_error(status: StatusCode) -> FetchError {
    FetchError::Transport(format!("HTTP status {}", status))
}

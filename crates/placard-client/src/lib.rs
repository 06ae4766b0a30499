//! Fetch-and-render client for the placard message API.
//!
//! [`FetchClient::fetch_and_render`] performs one GET against the message
//! endpoint, reads the body as text, probes a `message` field on it and
//! writes the result into the page's `response` element. Failures are
//! logged and leave the page untouched.

use placard_core::{loose, Page, PageError, RESPONSE_ELEMENT_ID};
use tracing::{error, info};
use uuid::Uuid;

/// Path of the message endpoint, relative to the client's base URL.
pub const MESSAGE_PATH: &str = "/api/message";

/// Errors that can occur during a fetch-and-render call.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Request or body read failed.
    #[error("message request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The render target is missing from the page.
    #[error("render failed: {0}")]
    Page(#[from] PageError),
}

/// HTTP client for the placard message endpoint.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Creates a client targeting the given base URL, e.g.
    /// `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the message endpoint and renders the result into the page's
    /// `response` element.
    ///
    /// Emits an invocation marker before any network activity. On success
    /// the element is written exactly once; the body is read as text and
    /// never parsed, so the `message` probe misses and the element ends up
    /// with the literal text `undefined`. On any failure one error is
    /// logged and the page is left unmodified.
    pub async fn fetch_and_render(&self, page: &mut Page) {
        let call_id = Uuid::new_v4();
        info!(%call_id, url = %format!("{}{}", self.base_url, MESSAGE_PATH), "fetch triggered");

        match self.try_fetch_and_render(page).await {
            Ok(body) => {
                info!(%call_id, body = %body, "response received");
            }
            Err(e) => {
                error!(%call_id, error = %e, "fetch-and-render failed");
            }
        }
    }

    async fn try_fetch_and_render(&self, page: &mut Page) -> Result<String, FetchError> {
        let body = self.fetch_text().await?;
        let value = loose::text_field(&body, "message");
        page.set_text(RESPONSE_ELEMENT_ID, value.render_text())?;
        Ok(body)
    }

    /// Reads the message endpoint body as raw text.
    async fn fetch_text(&self) -> Result<String, reqwest::Error> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, MESSAGE_PATH))
            .send()
            .await?;
        response.text().await
    }
}

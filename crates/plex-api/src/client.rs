use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::format::{ContentType, DecodeFailure};
use crate::request::ApiRequest;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
    #[error("Header {name} contains invalid characters")]
    InvalidHeader { name: String },
    #[error("Failed to encode {format} body: {message}")]
    Serialize { format: ContentType, message: String },
    #[error("Failed to decode {format} response ({failure:?}): {message}")]
    Deserialize {
        format: ContentType,
        failure: DecodeFailure,
        message: String,
    },
    #[error("Response matched neither schema (success: {success}; error: {error})")]
    AmbiguousSchema { success: String, error: String },
}

/// Shared HTTP transport for every Plex request.
///
/// Wraps a pooled [`reqwest::Client`]. It holds no per-call state, so clones
/// can dispatch concurrently without coordination. Retries and timeouts are
/// left to the caller.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ApiError> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner })
    }

    /// Use a preconfigured [`reqwest::Client`] (proxies, timeouts, TLS roots).
    pub fn with_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Dispatch `request` and decode the body with its declared content type.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let format = request.content_type();
        let body = self.execute_raw(request).await?;
        format.deserialize(&body)
    }

    /// Dispatch `request` and return the body verbatim.
    pub async fn execute_raw(&self, request: ApiRequest) -> Result<String, ApiError> {
        let resp = self.send(request).await?;
        Ok(Self::check_status(resp).await?.text().await?)
    }

    /// Dispatch `request`, discarding any body on success.
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        let resp = self.send(request).await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// Return a reference to the underlying [`reqwest::Client`].
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let url = request.full_uri()?;
        let headers = header_map(&request)?;
        debug!(
            operation = request.operation().unwrap_or("adhoc"),
            method = %request.method(),
            uri = %url,
            "dispatching plex request"
        );

        let mut builder = self
            .inner
            .request(request.method().clone(), url)
            .headers(headers);
        if let Some(body) = request.into_body() {
            builder = builder.body(body);
        }
        Ok(builder.send().await?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(status, "plex request rejected");
            return Err(ApiError::ApiResponse { status, body });
        }
        Ok(resp)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

fn header_map(request: &ApiRequest) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    for (name, value) in request.headers() {
        let invalid = || ApiError::InvalidHeader { name: name.clone() };
        headers.insert(
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?,
            HeaderValue::from_str(value).map_err(|_| invalid())?,
        );
    }
    Ok(headers)
}

use crate::fetch::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// An outgoing GET. The URL has already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self { url }
    }
}

/// A completed exchange with a success status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The network seam. One call, one result.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// reqwest-backed transport. Sends only reqwest's default headers. Non-2xx
/// statuses are reported as transport failures so callers never try to
/// decode an error page.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// `timeout` of `None` keeps reqwest's default (no overall deadline).
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let response = self.client.get(request.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(Response {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

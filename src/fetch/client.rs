use crate::fetch::decode::{self, Decoder, JsonDecoder};
use crate::fetch::error::FetchError;
use crate::fetch::transport::{HttpTransport, Request, Transport};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Generic GET-and-decode client.
#[derive(Debug, Clone)]
pub struct FetchClient<T, D = JsonDecoder> {
    transport: T,
    decoder: D,
}

impl FetchClient<HttpTransport, JsonDecoder> {
    /// Real network client: reqwest transport + JSON decoding.
    pub fn http(timeout: Option<Duration>) -> Result<Self, FetchError> {
        Ok(Self::new(HttpTransport::new(timeout)?, JsonDecoder))
    }
}

impl<T: Transport, D: Decoder> FetchClient<T, D> {
    pub fn new(transport: T, decoder: D) -> Self {
        Self { transport, decoder }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url` once and decode the body as `V`.
    ///
    /// Order of checks:
    /// 1) URL must parse and be http(s), otherwise no request is sent
    /// 2) transport errors are returned as-is, no body is looked at
    /// 3) empty body => NoData
    /// 4) decode failure => Decoding
    pub async fn fetch<V: DeserializeOwned>(&self, url: &str) -> Result<V, FetchError> {
        let url = parse_url(url)?;

        debug!(url = %url, "sending GET");
        let response = self.transport.send(Request::get(url)).await?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );

        self.decode_body(&response.body)
    }

    /// Decode an already-received body with the same empty/decoding rules as
    /// [`fetch`](Self::fetch).
    pub fn decode_body<V: DeserializeOwned>(&self, body: &[u8]) -> Result<V, FetchError> {
        decode::decode_body(&self.decoder, body)
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|_| FetchError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(FetchError::InvalidUrl(raw.to_string())),
    }
}

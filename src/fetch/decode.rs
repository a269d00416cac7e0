use crate::fetch::error::{DecodeError, FetchError};
use serde::de::DeserializeOwned;

/// Turns a non-empty response body into a typed value.
pub trait Decoder: Send + Sync {
    fn decode<V: DeserializeOwned>(&self, body: &[u8]) -> Result<V, DecodeError>;
}

/// Strict JSON decoding via serde_json. No best-effort recovery: any syntax
/// or shape mismatch fails the whole body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<V: DeserializeOwned>(&self, body: &[u8]) -> Result<V, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Apply the empty-body rule, then decode. Shared by network fetches and
/// local files so both report the same errors.
pub fn decode_body<V: DeserializeOwned, D: Decoder>(
    decoder: &D,
    body: &[u8],
) -> Result<V, FetchError> {
    if body.is_empty() {
        return Err(FetchError::NoData);
    }
    Ok(decoder.decode(body)?)
}

use std::error::Error as StdError;
use thiserror::Error;

/// Why a fetch did not produce a value. Every variant is terminal for the
/// attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    #[error("transport error")]
    Transport(#[from] TransportError),

    #[error("no data received")]
    NoData,

    #[error("decoding error")]
    Decoding(#[from] DecodeError),
}

/// Failure reported by a [`Transport`](super::Transport) before any body was
/// accepted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One-line summary of an error and its causes, outermost first:
/// `transport error: server returned HTTP 503`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(next) = cause {
        out.push_str(": ");
        out.push_str(&next.to_string());
        cause = next.source();
    }
    out
}

//! Single-shot HTTP fetch with a classified error taxonomy.
//!
//! The client is generic over its transport and decoder so tests can swap
//! in fakes without touching the network.

pub mod client;
pub mod decode;
pub mod error;
pub mod transport;

pub use client::FetchClient;
pub use decode::{Decoder, JsonDecoder, decode_body};
pub use error::{DecodeError, FetchError, TransportError, error_chain};
pub use transport::{HttpTransport, Request, Response, Transport};

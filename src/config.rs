use std::time::Duration;

pub const DEFAULT_ENDPOINT_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Runtime settings. Every field has a working default so the tool runs
/// with no flags at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: String,
    /// `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout: None,
        }
    }
}

//! Client configuration and the fixed request headers.

use serde::{Deserialize, Serialize};

/// Endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api-v6.streeteasy.com/";

/// Headers attached to every request. Upstream rejects calls that do not look
/// like they come from its own web frontend.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("content-type", "application/json"),
    ("accept", "application/json"),
    ("apollographql-client-name", "srp-frontend-service"),
    (
        "apollographql-client-version",
        "version  50bef71ef923e981bdcb7c781851c3bfdb12a0c1",
    ),
    ("app-version", "1.0.0"),
    ("os", "web"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36",
    ),
    ("sec-ch-ua", "\"Chromium\";v=\"133\", \"Not(A:Brand\";v=\"99\""),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-site", "same-site"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-dest", "empty"),
    ("origin", "https://streeteasy.com"),
    ("referer", "https://streeteasy.com/"),
    ("accept-language", "en-US,en;q=0.9"),
    ("dnt", "1"),
    ("x-forwarded-proto", "https"),
];

/// Options accepted by `StreetEasyClient::with_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Overrides `DEFAULT_ENDPOINT`. An empty string counts as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The endpoint the client will talk to.
    pub fn resolved_endpoint(&self) -> &str {
        match self.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => endpoint,
            _ => DEFAULT_ENDPOINT,
        }
    }
}

/*
[INPUT]:  HTTP configuration (API key, base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::endpoint::{Endpoint, transport_error};
use crate::http::{IokaError, Result};

/// Sandbox environment, used unless another base URL is configured
pub const STAGE_BASE_URL: &str = "https://stage-api.ioka.kz";
pub const PRODUCTION_BASE_URL: &str = "https://api.ioka.kz";

/// API version prefix appended to the base URL
pub const API_VERSION: &str = "v2";

pub(crate) const API_KEY_HEADER: &str = "api-key";

/// HTTP client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
    #[serde(default = "default_connect_timeout", with = "duration_secs")]
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration for the stage environment with default timeouts
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// `{base_url}/v2`, the root every endpoint path hangs off
    pub fn api_root(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| IokaError::Config(format!("base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(API_VERSION);
        Ok(url)
    }

    /// Headers sent with every request; the key is marked sensitive
    pub(crate) fn default_headers(&self) -> Result<HeaderMap> {
        if self.api_key.trim().is_empty() {
            return Err(IokaError::Config("API key must not be empty".to_string()));
        }
        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| IokaError::Config(format!("API key is not a valid header value: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        Ok(headers)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn default_base_url() -> String {
    STAGE_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Asynchronous client for the ioka API.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct IokaClient {
    http_client: Client,
    api_root: Url,
    config: ClientConfig,
}

impl IokaClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .default_headers(config.default_headers()?)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_root: config.api_root()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one endpoint and decode its response
    pub(crate) async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let url = endpoint.url(&self.api_root)?;
        debug!(method = %endpoint.method, path = url.path(), "ioka request");

        let mut builder = self.http_client.request(endpoint.method.clone(), url);
        if let Some(body) = &endpoint.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        endpoint.process(status, &body)
    }
}

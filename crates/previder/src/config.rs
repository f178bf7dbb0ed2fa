//! Configuration for the Previder client

use http::{HeaderMap, HeaderValue};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::{API_BASE_PATH, CUSTOMER_ID_LEN, DEFAULT_BASE_URL, error::Error};

/// Configuration for the Previder client.
///
/// The configuration is an explicit value handed to [`Client::from_config`](crate::Client::from_config).
/// Nothing reads it again after the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Access token sent in the `X-Auth-Token` header (required)
    pub auth_token: Option<SecretString>,

    /// Base URL for the API, normalized at client construction
    pub base_url: Option<String>,

    /// Sub-customer id; only used when it is exactly 24 characters long
    pub customer_id: Option<String>,

    /// Timeout for a single request/response cycle
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// Connection pool configuration
    pub connection_pool: ConnectionPoolConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            base_url: None,
            customer_id: None,
            timeout: Duration::from_secs(60),
            default_headers: HeaderMap::new(),
            connection_pool: ConnectionPoolConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an access token.
    pub fn with_auth_token(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(SecretString::new(auth_token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.auth_token.is_some() {
            self.auth_token = other.auth_token;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.customer_id.is_some() {
            self.customer_id = other.customer_id;
        }
        if other.timeout != Duration::from_secs(60) {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }

        self
    }
}

/// Configuration for HTTP connection pooling.
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host
    pub max_idle_per_host: usize,

    /// Idle connection timeout
    pub idle_timeout: Duration,

    /// TCP keep-alive interval
    pub tcp_keepalive: Option<Duration>,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access token.
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.config.auth_token = Some(SecretString::new(auth_token.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the sub-customer id.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.config.customer_id = Some(customer_id.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, config: ConnectionPoolConfig) -> Self {
        self.config.connection_pool = config;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Normalize a user supplied base URL.
///
/// An unset or blank URL falls back to [`DEFAULT_BASE_URL`]. The result always
/// ends with `/`, ends with the `api/` segment exactly once, and carries a scheme
/// (`https://` is prepended when none is given). Applying it twice is a no-op.
pub fn normalize_base_url(base_url: Option<&str>) -> crate::Result<Url> {
    let mut url = base_url
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string();

    if let Some((scheme, _)) = url.split_once("://")
        && scheme != "http"
        && scheme != "https"
    {
        return Err(Error::InvalidUrl(format!(
            "unsupported scheme '{scheme}' in '{url}', expected http or https"
        )));
    }

    if !url.ends_with('/') {
        url.push('/');
    }
    if !url.ends_with(API_BASE_PATH) {
        url.push_str(API_BASE_PATH);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        url.insert_str(0, "https://");
    }

    Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("'{url}': {e}")))
}

/// Keep a sub-customer id only when it has exactly [`CUSTOMER_ID_LEN`] characters
/// and is a legal header value.
pub fn valid_customer_id(customer_id: Option<&str>) -> Option<String> {
    match customer_id {
        Some(id)
            if id.chars().count() == CUSTOMER_ID_LEN && HeaderValue::from_str(id).is_ok() =>
        {
            Some(id.to_string())
        }
        Some(id) => {
            tracing::debug!(
                length = id.chars().count(),
                "Ignoring sub-customer id, it must be a header-safe string of exactly {CUSTOMER_ID_LEN} characters"
            );
            None
        }
        None => None,
    }
}

//! Previder portal HTTP provider implementation
//!
//! This provider sends requests to the Previder portal API with token
//! authentication and optional sub-customer scoping.

use super::{HttpProvider, Method, RequestBuilder, Response, provider::serialize_body};
use crate::{
    AUTH_HEADER, CUSTOMER_HEADER, JSON_CONTENT_TYPE, VERSION,
    config::{ConnectionPoolConfig, normalize_base_url, valid_customer_id},
    error::{Error, Result},
    types::PageRequest,
};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, header};
use secrecy::{ExposeSecret, SecretString};
use std::{sync::Arc, time::Duration};
use url::Url;

/// HTTP provider for the Previder portal API.
///
/// # Architecture
///
/// - Uses `reqwest` for the HTTP client and its connection pool
/// - Authenticates every request with the `X-Auth-Token` header
/// - Adds `X-CustomerId` only for well-formed 24 character ids
/// - Sends each request once; there is no retry at this layer
///
/// # Example
///
/// ```rust,no_run
/// use previder::http::PreviderHttpProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(PreviderHttpProvider::builder()
///     .auth_token("token")
///     .build()
///     .unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PreviderHttpProvider {
    pub(crate) inner: Arc<ProviderInner>,
}

#[derive(Debug)]
pub(crate) struct ProviderInner {
    /// HTTP client for making requests
    pub(crate) http_client: reqwest::Client,
    /// Normalized base URL, always ending in `api/`
    pub(crate) base_url: Url,
    /// Headers sent with every request, auth and tenant included
    pub(crate) headers: HeaderMap,
    /// Sub-customer id, when one was accepted
    pub(crate) customer_id: Option<String>,
    /// Timeout for a single request
    pub(crate) timeout: Duration,
}

impl PreviderHttpProvider {
    /// Create a new builder for configuring the provider.
    pub fn builder() -> PreviderHttpProviderBuilder {
        PreviderHttpProviderBuilder::default()
    }

    /// Create a request builder with provider configuration.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        page: Option<&PageRequest>,
    ) -> Result<RequestBuilder> {
        let path = path.trim_start_matches('/');
        let url = self.inner.base_url.join(path).map_err(|e| {
            Error::InvalidUrl(format!("Failed to construct URL from path '{path}': {e}"))
        })?;

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .headers(&self.inner.headers);

        if let Some(page) = page {
            builder = builder.page(page);
        }

        Ok(builder)
    }

    /// Sub-customer id sent with every request, if any.
    pub fn customer_id(&self) -> Option<&str> {
        self.inner.customer_id.as_deref()
    }
}

#[async_trait]
impl HttpProvider for PreviderHttpProvider {
    async fn request(
        &self,
        method: Method,
        path: &str,
        page: Option<&PageRequest>,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<Response> {
        let mut builder = self.build_request(method, path, page)?;

        if let Some(body) = body {
            builder = builder.body(serialize_body(body)?);
        }

        builder.send().await
    }

    fn provider_name(&self) -> &'static str {
        "previder"
    }

    fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a `PreviderHttpProvider` with custom configuration.
///
/// # Example
///
/// ```rust,no_run
/// use previder::http::PreviderHttpProvider;
///
/// let provider = PreviderHttpProvider::builder()
///     .auth_token("token")
///     .customer_id("0123456789abcdef01234567")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct PreviderHttpProviderBuilder {
    auth_token: Option<SecretString>,
    base_url: Option<String>,
    customer_id: Option<String>,
    timeout: Option<Duration>,
    connection_pool: ConnectionPoolConfig,
    default_headers: HeaderMap,
}

impl PreviderHttpProviderBuilder {
    /// Set the access token.
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(SecretString::new(auth_token.into().into_boxed_str()));
        self
    }

    pub(crate) fn auth_secret(mut self, auth_token: Option<SecretString>) -> Self {
        self.auth_token = auth_token;
        self
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://portal.previder.com/api/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the sub-customer id. Ids that are not 24 characters long are ignored.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool = config;
        self
    }

    /// Add custom headers to include with every request.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.default_headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Build the provider with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The access token is missing or empty
    /// - The base URL is invalid
    /// - HTTP client creation fails
    pub fn build(self) -> Result<PreviderHttpProvider> {
        let token = self
            .auth_token
            .filter(|t| !t.expose_secret().is_empty())
            .ok_or_else(|| Error::Config("missing token".to_string()))?;

        let base_url = normalize_base_url(self.base_url.as_deref())?;
        let customer_id = valid_customer_id(self.customer_id.as_deref());

        let mut headers = self.default_headers;
        let json = HeaderValue::from_static(JSON_CONTENT_TYPE);
        headers.insert(header::CONTENT_TYPE, json.clone());
        headers.insert(header::ACCEPT, json);

        let mut auth = HeaderValue::from_str(token.expose_secret())
            .map_err(|_| Error::InvalidHeaderValue(format!("{AUTH_HEADER}: <redacted>")))?;
        auth.set_sensitive(true);
        headers.insert(AUTH_HEADER, auth);

        if let Some(value) = customer_id
            .as_deref()
            .and_then(|id| HeaderValue::from_str(id).ok())
        {
            headers.insert(CUSTOMER_HEADER, value);
        }

        let pool = self.connection_pool;
        let http_client = reqwest::Client::builder()
            .user_agent(format!("previder-rust/{VERSION}"))
            .pool_max_idle_per_host(pool.max_idle_per_host)
            .pool_idle_timeout(pool.idle_timeout)
            .tcp_keepalive(pool.tcp_keepalive)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        tracing::debug!(
            base_url = %base_url,
            tenant_scoped = customer_id.is_some(),
            "Built Previder HTTP provider"
        );

        Ok(PreviderHttpProvider {
            inner: Arc::new(ProviderInner {
                http_client,
                base_url,
                headers,
                customer_id,
                timeout: self.timeout.unwrap_or(Duration::from_secs(60)),
            }),
        })
    }
}

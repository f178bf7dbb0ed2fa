//! Transport client for the Previder portal API

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::{ClientConfig, ConnectionPoolConfig},
    error::{Error, Result},
    http::{HttpProvider, Method, PreviderHttpProvider},
    resources::{Customers, Tasks, VirtualNetworks, VirtualServers},
    types::{ApiInfo, PageRequest},
};

/// Main client for interacting with the Previder portal API.
///
/// Every outbound call goes through this type. It owns the connection pool and
/// the immutable configuration; clones share both and may be used from many
/// tasks at once.
///
/// # Example
///
/// ```rust,no_run
/// use previder::Client;
///
/// let client = Client::new("access-token")?;
/// # Ok::<(), previder::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// HTTP provider for making requests (handles auth and tenant headers)
    provider: Arc<dyn HttpProvider>,
}

impl Client {
    /// Create a new client with an access token and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty.
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        Self::builder().auth_token(auth_token).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom HTTP provider.
    pub fn from_provider(provider: Arc<dyn HttpProvider>) -> Self {
        Self {
            inner: Arc::new(ClientInner { provider }),
        }
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The access token is missing or empty
    /// - The base URL has an unsupported scheme or cannot be parsed
    /// - HTTP client configuration fails
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut provider_builder = PreviderHttpProvider::builder()
            .auth_secret(config.auth_token)
            .timeout(config.timeout)
            .connection_pool(config.connection_pool)
            .headers(&config.default_headers);

        if let Some(base_url) = config.base_url {
            provider_builder = provider_builder.base_url(base_url);
        }
        if let Some(customer_id) = config.customer_id {
            provider_builder = provider_builder.customer_id(customer_id);
        }

        Ok(Self::from_provider(Arc::new(provider_builder.build()?)))
    }

    /// Access the task endpoints and the task poller.
    pub fn tasks(&self) -> Tasks {
        Tasks::new(self.clone())
    }

    /// Access the virtual network endpoints.
    pub fn virtual_networks(&self) -> VirtualNetworks {
        VirtualNetworks::new(self.clone())
    }

    /// Access the virtual server endpoints.
    pub fn virtual_servers(&self) -> VirtualServers {
        VirtualServers::new(self.clone())
    }

    /// Access the customer endpoints.
    pub fn customers(&self) -> Customers {
        Customers::new(self.clone())
    }

    /// Send a `GET` request and decode the response.
    ///
    /// Paging parameters are only attached when `page` is given. Returns
    /// `Ok(None)` for a successful response with an empty body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        page: Option<&PageRequest>,
    ) -> Result<Option<T>> {
        self.send(Method::GET, path, page, None).await
    }

    /// Send a `POST` request with a JSON body and decode the response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, None, Some(erase(body))).await
    }

    /// Send a `POST` request without a body, as used by action endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.send(Method::POST, path, None, None).await
    }

    /// Send a `PUT` request with a JSON body and decode the response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, None, Some(erase(body))).await
    }

    /// Send a `DELETE` request without a body and decode the response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.send(Method::DELETE, path, None, None).await
    }

    /// Send a `DELETE` request with a JSON body and decode the response.
    pub async fn delete_with_body<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::DELETE, path, None, Some(erase(body))).await
    }

    /// Fetch the API name and version from the base URL.
    pub async fn api_info(&self) -> Result<ApiInfo> {
        self.get("", None)
            .await?
            .ok_or_else(|| Error::missing_body(""))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        page: Option<&PageRequest>,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<Option<T>> {
        self.inner
            .provider
            .request(method, path, page, body)
            .await?
            .decode()
    }

    /// Get the normalized base URL for the API
    pub fn base_url(&self) -> &str {
        self.inner.provider.base_url()
    }

    /// Get the provider name (for debugging)
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider.provider_name()
    }
}

fn erase<B: Serialize + Send + Sync>(body: &B) -> &(dyn erased_serde::Serialize + Send + Sync) {
    body
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the access token.
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.config.auth_token = Some(SecretString::new(auth_token.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Scope every request to a sub-customer.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.config.customer_id = Some(customer_id.into());
        self
    }

    /// Set the timeout for a single request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, config: ConnectionPoolConfig) -> Self {
        self.config.connection_pool = config;
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
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

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resource;

    #[test]
    fn test_client_new() {
        let client = Client::new("test-token").unwrap();
        assert_eq!(client.base_url(), "https://portal.previder.com/api/");
        assert_eq!(client.provider_name(), "previder");
    }

    #[test]
    fn test_client_empty_token() {
        let result = Client::new("");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .auth_token("test-token")
            .base_url("example.com")
            .customer_id("0123456789abcdef01234567")
            .timeout(Duration::from_secs(30))
            .default_header("x-request-source", "cli")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://example.com/api/");
    }

    #[test]
    fn test_client_from_config_invalid_scheme() {
        let mut config = ClientConfig::with_auth_token("test-token");
        config.base_url = Some("ftp://portal.example.com".to_string());

        match Client::from_config(config) {
            Err(Error::InvalidUrl(msg)) => assert!(msg.contains("ftp")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_clone_shares_provider() {
        let client1 = Client::new("test-token").unwrap();
        let client2 = client1.clone();
        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));

        let tasks = client2.tasks();
        assert_eq!(tasks.client().base_url(), client1.base_url());
    }

    #[test]
    fn test_default_header_rejects_invalid_name() {
        let result = Client::builder().default_header("bad header", "v");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }
}

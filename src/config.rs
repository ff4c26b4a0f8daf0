//! client configuration
//!
//! build a [`ClientConfig`] with a token and optional overrides, then pass it
//! to [`crate::Client::new`] or [`crate::CatalogLoader::new`].

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// graphql endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql/";

/// bound applied to multipart uploads
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(90);

/// env var holding the bearer token
pub const TOKEN_ENV: &str = "SALEOR_AUTH_TOKEN";

/// env var holding the graphql endpoint
pub const ENDPOINT_ENV: &str = "SALEOR_GRAPHQL_URL";

type BuilderHook =
    Arc<dyn Fn(reqwest::blocking::ClientBuilder) -> reqwest::blocking::ClientBuilder + Send + Sync>;

/// configuration for the saleor client
#[derive(Clone)]
pub struct ClientConfig {
    /// original endpoint input
    pub(crate) raw_endpoint: String,

    /// graphql endpoint (e.g., "<http://localhost:8000/graphql/>")
    pub(crate) endpoint: Url,

    /// whether the provided endpoint parsed successfully
    pub(crate) endpoint_valid: bool,

    /// bearer token sent in the authorization header
    pub(crate) token: String,

    /// timeout for plain json requests (none by default)
    pub(crate) timeout: Option<Duration>,

    /// timeout for multipart uploads
    pub(crate) upload_timeout: Duration,

    /// user agent string
    pub(crate) user_agent: String,

    /// whether to verify ssl certificates
    pub(crate) verify_ssl: bool,

    /// additional headers to send with every request
    pub(crate) extra_headers: HeaderMap,

    /// prebuilt http client (takes precedence over http_client_builder)
    pub(crate) http_client: Option<reqwest::blocking::Client>,

    /// callback to customize the http client builder before building
    pub(crate) http_client_builder: Option<BuilderHook>,
}

fn parse_endpoint(raw: &str) -> (Url, bool) {
    match Url::parse(raw).or_else(|_| Url::parse(&format!("http://{raw}"))) {
        Ok(url) => (url, true),
        Err(_) => (
            Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            false,
        ),
    }
}

impl ClientConfig {
    /// create a configuration for the default endpoint
    ///
    /// # example
    ///
    /// ```
    /// use saleor_loader::ClientConfig;
    ///
    /// let config = ClientConfig::new("your-token-here")
    ///     .with_endpoint("https://shop.example.com/graphql/");
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        let (endpoint, endpoint_valid) = parse_endpoint(DEFAULT_ENDPOINT);

        Self {
            raw_endpoint: DEFAULT_ENDPOINT.to_string(),
            endpoint,
            endpoint_valid,
            token: token.into(),
            timeout: None,
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
            user_agent: format!("saleor-loader/{} (Rust)", env!("CARGO_PKG_VERSION")),
            verify_ssl: true,
            extra_headers: HeaderMap::new(),
            http_client: None,
            http_client_builder: None,
        }
    }

    /// build a configuration from `SALEOR_AUTH_TOKEN` and `SALEOR_GRAPHQL_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV} is not set")))?;
        let config = Self::new(token);
        Ok(match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) => config.with_endpoint(endpoint),
            Err(_) => config,
        })
    }

    /// set the graphql endpoint
    ///
    /// the url is used as-is; saleor expects the trailing slash.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        let raw = endpoint.as_ref();
        let (url, valid) = parse_endpoint(raw);
        self.raw_endpoint = raw.to_string();
        self.endpoint = url;
        self.endpoint_valid = valid;
        self
    }

    /// set a timeout for plain json requests
    ///
    /// default: no timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// set the timeout for multipart uploads
    ///
    /// default: 90 seconds
    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    /// set a custom user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// disable ssl certificate verification (not recommended for production)
    ///
    /// default: enabled
    pub fn with_ssl_verification(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// add a header to every request
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.extra_headers.insert(name, value);
        self
    }

    /// add a set of headers to every request
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers.extend(headers);
        self
    }

    /// inject a prebuilt http client.
    ///
    /// the client is used as-is: auth headers, tls, timeouts and user agent
    /// all come from it, so an empty token is accepted. the upload timeout is
    /// still applied per request.
    pub fn with_http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// customize the http client builder before the client is created.
    ///
    /// the callback receives a builder with the auth header, extra headers,
    /// user agent, timeout, and ssl settings already applied.
    /// ignored if `with_http_client` is also set.
    pub fn with_http_client_builder<F>(mut self, f: F) -> Self
    where
        F: Fn(reqwest::blocking::ClientBuilder) -> reqwest::blocking::ClientBuilder
            + Send
            + Sync
            + 'static,
    {
        self.http_client_builder = Some(Arc::new(f));
        self
    }

    /// the configured graphql endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// timeout applied to multipart uploads
    pub fn upload_timeout(&self) -> Duration {
        self.upload_timeout
    }

    /// access extra headers configured on this client
    pub fn extra_headers(&self) -> &HeaderMap {
        &self.extra_headers
    }

    /// validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.endpoint_valid {
            return Err(Error::Config(format!(
                "invalid endpoint: {}",
                self.raw_endpoint
            )));
        }

        if self.endpoint.scheme() != "http" && self.endpoint.scheme() != "https" {
            return Err(Error::Config(format!(
                "invalid url scheme: {}. must be http or https",
                self.endpoint.scheme()
            )));
        }

        if self.http_client.is_none() && self.token.is_empty() {
            return Err(Error::Config("auth token cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("upload_timeout", &self.upload_timeout)
            .field("user_agent", &self.user_agent)
            .field("verify_ssl", &self.verify_ssl)
            .field("extra_headers", &self.extra_headers.len())
            .field("http_client", &self.http_client.is_some())
            .field("http_client_builder", &self.http_client_builder.is_some())
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = ClientConfig::new("test-token");
        assert_eq!(config.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.token, "test-token");
        assert_eq!(config.timeout, None);
        assert_eq!(config.upload_timeout(), Duration::from_secs(90));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_endpoint_keeps_trailing_slash() {
        let config = ClientConfig::new("token").with_endpoint("https://shop.example.com/graphql/");
        assert_eq!(
            config.endpoint().as_str(),
            "https://shop.example.com/graphql/"
        );
    }

    #[test]
    fn test_with_endpoint_without_scheme() {
        let config = ClientConfig::new("token").with_endpoint("127.0.0.1:8000/graphql/");
        assert_eq!(config.endpoint().as_str(), "http://127.0.0.1:8000/graphql/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty_token = ClientConfig::new("");
        assert!(matches!(empty_token.validate(), Err(Error::Config(_))));

        // empty token is allowed when a prebuilt client handles auth
        let prebuilt = ClientConfig::new("").with_http_client(reqwest::blocking::Client::new());
        assert!(prebuilt.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_endpoint() {
        let mut config = ClientConfig::new("token");
        config.endpoint_valid = false;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validation_invalid_scheme() {
        let config = ClientConfig::new("token").with_endpoint("ftp://example.com/graphql/");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_builder_helpers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("value"),
        );

        let config = ClientConfig::new("token")
            .with_timeout(Duration::from_secs(5))
            .with_upload_timeout(Duration::from_secs(10))
            .with_user_agent("loader-test")
            .with_ssl_verification(false)
            .with_headers(headers)
            .with_header(
                HeaderName::from_static("x-other"),
                HeaderValue::from_static("other"),
            )
            .with_http_client_builder(|b| b.no_proxy());

        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.upload_timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent, "loader-test");
        assert!(!config.verify_ssl);
        assert_eq!(config.extra_headers().get("x-test").unwrap(), "value");
        assert_eq!(config.extra_headers().get("x-other").unwrap(), "other");
        assert!(config.http_client_builder.is_some());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("\"<redacted>\""));
        assert!(debug.contains("http_client: false"));
    }
}

//! Client configuration

/// Environment variable holding the backend origin
pub const API_BASE_URL_ENV: &str = "XQUISITO_API_BASE_URL";

/// Default backend origin for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for connecting to the Xquisito backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.xquisito.com")
    pub base_url: String,

    /// Bearer token issued by the identity provider
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Create a configuration from the environment
    ///
    /// Reads `XQUISITO_API_BASE_URL`, falling back to the local default.
    /// A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let base_url =
            std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

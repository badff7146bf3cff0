//! Client configuration

/// Client configuration for connecting to the admin API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authenticated calls
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

    /// Load configuration from the environment
    ///
    /// | Variable | Default | Meaning |
    /// |----------|---------|---------|
    /// | SLATE_BASE_URL | http://localhost:8080 | Admin API base URL |
    /// | SLATE_TOKEN | unset | Bearer token |
    /// | SLATE_TIMEOUT_SECS | 30 | Request timeout |
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            base_url: std::env::var("SLATE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            token: std::env::var("SLATE_TOKEN").ok(),
            timeout: std::env::var("SLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
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
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("http://admin.local")
            .with_token("jwt")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://admin.local");
        assert_eq!(config.token.as_deref(), Some("jwt"));
        assert_eq!(config.timeout, 5);
    }
}

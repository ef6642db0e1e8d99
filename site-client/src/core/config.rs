use std::env;

/// Default base URL used when `SITE_API_BASE_URL` is not set.
///
/// Points at the local development server (the workspace mock server binds
/// here by default).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable controlling the API base URL.
pub const BASE_URL_ENV: &str = "SITE_API_BASE_URL";

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Build a configuration with an explicit base URL.
    ///
    /// A trailing slash is trimmed so path joining stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read configuration from the environment, falling back to the local
    /// development default when `SITE_API_BASE_URL` is absent.
    pub fn from_env() -> Self {
        let base_url =
            env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.base_url(), "https://api.example.com/api/v1");
    }

    #[test]
    fn test_default_points_at_local_dev() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }
}

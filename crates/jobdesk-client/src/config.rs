//! Connection settings.

use std::time::Duration;

use reqwest::Url;

use crate::error::ClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Parse `base_url`, e.g. `http://localhost:8080`. Routes are resolved
    /// under `/api/v1` on that origin.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the URL does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            message: source.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_owned(),
                message: "URL cannot be a base".to_owned(),
            });
        }
        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Backend origin.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL of an API route such as `clients/4/orders`.
    pub(crate) fn endpoint(&self, route: &str) -> Result<Url, ClientError> {
        let path = format!("api/v1/{}", route.trim_start_matches('/'));
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(&path).map_err(|source| ClientError::InvalidUrl {
            url: path,
            message: source.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! URL handling.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8080", "http://localhost:8080/api/v1/jobs")]
    #[case("http://localhost:8080/", "http://localhost:8080/api/v1/jobs")]
    #[case("https://example.com/desk", "https://example.com/desk/api/v1/jobs")]
    fn resolves_routes_under_the_api_prefix(#[case] base: &str, #[case] expected: &str) {
        let config = ClientConfig::new(base).expect("valid base");
        let url = config.endpoint("/jobs").expect("valid route");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:desk@example.com")]
    fn rejects_unusable_bases(#[case] base: &str) {
        let error = ClientConfig::new(base).expect_err("invalid base");
        assert!(matches!(error, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn timeout_defaults_to_ten_seconds() {
        let config = ClientConfig::new("http://localhost").expect("valid base");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        let config = config.with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }
}

//! HTTP credential source
//!
//! Issues a plain `GET` against the backend token endpoint. No query
//! parameters or auth headers are sent.

use async_trait::async_trait;
use log::{debug, error};

use super::{Credential, CredentialSource, parse_token_payload};
use crate::error::CredentialFetchError;

/// Fetches credentials from an HTTP endpoint such as `http://host/token`.
#[derive(Debug, Clone)]
pub struct HttpCredentialSource {
    client: reqwest::Client,
    token_url: reqwest::Url,
}

impl HttpCredentialSource {
    /// Builds a source for the given endpoint URL.
    pub fn new(token_url: &str) -> Result<Self, CredentialFetchError> {
        Self::with_client(reqwest::Client::new(), token_url)
    }

    /// Builds a source sharing an existing `reqwest::Client`.
    pub fn with_client(
        client: reqwest::Client,
        token_url: &str,
    ) -> Result<Self, CredentialFetchError> {
        let token_url = reqwest::Url::parse(token_url)
            .map_err(|e| CredentialFetchError::InvalidUrl(format!("{token_url}: {e}")))?;

        Ok(Self { client, token_url })
    }

    pub fn token_url(&self) -> &str {
        self.token_url.as_str()
    }
}

#[async_trait]
impl CredentialSource for HttpCredentialSource {
    async fn fetch(&self) -> Result<Credential, CredentialFetchError> {
        debug!("Requesting credential from {}", self.token_url);

        let response = self
            .client
            .get(self.token_url.clone())
            .send()
            .await
            .map_err(|e| {
                error!("Credential request to {} failed: {}", self.token_url, e);
                CredentialFetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Credential endpoint {} answered with status {}",
                self.token_url, status
            );
            return Err(CredentialFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CredentialFetchError::Network(e.to_string()))?;

        let credential = parse_token_payload(&body)?;
        debug!("Credential received from {}", self.token_url);
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        let err = HttpCredentialSource::new("not a url").unwrap_err();
        assert!(matches!(err, CredentialFetchError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("Invalid token URL: not a url"));
    }

    #[test]
    fn test_keeps_configured_url() {
        let source = HttpCredentialSource::new("http://127.0.0.1:8080/token").unwrap();
        assert_eq!(source.token_url(), "http://127.0.0.1:8080/token");
    }
}

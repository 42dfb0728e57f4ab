//! Token payload decoding
//!
//! The backend answers `GET /token` with `{ "token": "<string>" }`.

use serde::Deserialize;
use std::fmt;

use crate::error::CredentialFetchError;

/// Short-lived access token issued by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Tokens end up in log lines through `{:?}`, keep them out.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} bytes redacted>)", self.0.len())
    }
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    token: String,
}

/// Decodes a `/token` response body into a [`Credential`].
///
/// A body that is not JSON, lacks the `token` field, or carries a non-string
/// `token` is reported as [`CredentialFetchError::Malformed`].
pub fn parse_token_payload(body: &[u8]) -> Result<Credential, CredentialFetchError> {
    let payload: TokenPayload = serde_json::from_slice(body)
        .map_err(|e| CredentialFetchError::Malformed(e.to_string()))?;

    Ok(Credential(payload.token))
}

//! Credential source abstraction

use async_trait::async_trait;

use super::Credential;
use crate::error::CredentialFetchError;

/// Anything able to hand out an access credential.
///
/// The controller calls `fetch` at most once per session handle it builds.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn fetch(&self) -> Result<Credential, CredentialFetchError>;
}

//! Credential acquisition
//!
//! Fetches the short-lived access token that authorizes session handle construction.

pub mod http;
pub mod payload;
pub mod source;

pub use http::HttpCredentialSource;
pub use payload::{Credential, parse_token_payload};
pub use source::CredentialSource;

//! Credential checks behind the login screen.

pub mod rest;
pub mod static_credentials;

pub use rest::RestAuthenticator;
pub use static_credentials::StaticAuthenticator;

use crate::model::{LoginData, LoginValid};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("login request timed out: {0}")]
    Timeout(String),

    #[error("invalid login endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Decides whether a pair of credentials may log in.
///
/// A rejected pair is `Ok(LoginValid::Ko)`; `Err` is reserved for not being able to ask.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, login: &LoginData) -> Result<LoginValid, AuthError>;
}

//! Login against the remote admin API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{info, instrument};

use super::{AuthError, Authenticator};
use crate::http::with_trailing_slash;
use crate::model::{LoginData, LoginValid};

/// Posts the credentials to `login` under the admin base URL.
///
/// Any 2xx answer logs the user in; every other status is a rejection.
#[derive(Clone)]
pub struct RestAuthenticator {
    client: Client,
    endpoint: Url,
}

impl RestAuthenticator {
    /// # Errors
    ///
    /// Fails when `login` cannot be joined onto `base` or the reqwest client
    /// cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, AuthError> {
        let endpoint = with_trailing_slash(base)
            .join("login")
            .map_err(|e| AuthError::InvalidEndpoint(e.to_string()))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Authenticator for RestAuthenticator {
    #[instrument(skip_all, fields(email = %login.email))]
    async fn authenticate(&self, login: &LoginData) -> Result<LoginValid, AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(login)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Timeout(e.to_string())
                } else {
                    AuthError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let verdict = if status.is_success() {
            LoginValid::Ok
        } else {
            LoginValid::Ko
        };
        info!(status = status.as_u16(), ?verdict, "Login answered");
        Ok(verdict)
    }
}

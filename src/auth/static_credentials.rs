use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{AuthError, Authenticator};
use crate::model::{LoginData, LoginValid};

pub const DEFAULT_EMAIL: &str = "a@b.com";
pub const DEFAULT_PASSWORD: &str = "123";

/// Accepts exactly one email/password pair.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    credentials: LoginData,
}

impl StaticAuthenticator {
    pub fn new(credentials: LoginData) -> Self {
        Self { credentials }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::new(LoginData::new(DEFAULT_EMAIL, DEFAULT_PASSWORD))
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    #[instrument(skip_all, fields(email = %login.email))]
    async fn authenticate(&self, login: &LoginData) -> Result<LoginValid, AuthError> {
        let verdict = if *login == self.credentials {
            LoginValid::Ok
        } else {
            LoginValid::Ko
        };
        debug!(?verdict, "Checked credentials");
        Ok(verdict)
    }
}

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::auth::Authenticator;
use crate::model::{LoginData, LoginUiState, LoginValid};

/// Shortest password that enables the submit button.
pub const MIN_PASSWORD_LEN: usize = 3;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
        )
        .expect("email pattern is valid")
    })
}

/// Same shape Android accepts as an e-mail address, matched against the whole input.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Drives the login form.
pub struct LoginViewModel {
    authenticator: Arc<dyn Authenticator>,
    state: watch::Sender<LoginUiState>,
}

impl LoginViewModel {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        let (state, _) = watch::channel(LoginUiState::default());
        Self {
            authenticator,
            state,
        }
    }

    pub fn state(&self) -> LoginUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginUiState> {
        self.state.subscribe()
    }

    /// Called on every keystroke. Any earlier verdict is stale once the form changes.
    pub fn on_login_changed(&self, email: &str, password: &str) {
        let next = LoginUiState {
            login_enable: is_valid_email(email) && is_valid_password(password),
            is_valid_login: LoginValid::NotChecked,
            login_data: LoginData::new(email, password),
        };
        self.state.send_replace(next);
    }

    /// Submits the current form. Anything short of an explicit `Ok` counts as `Ko`.
    #[instrument(skip_all)]
    pub async fn on_login_selected(&self) -> LoginValid {
        let login = self.state.borrow().login_data.clone();
        let verdict = match self.authenticator.authenticate(&login).await {
            Ok(LoginValid::Ok) => LoginValid::Ok,
            Ok(_) => LoginValid::Ko,
            Err(e) => {
                warn!(error = %e, "Login check failed");
                LoginValid::Ko
            }
        };
        info!(email = %login.email, ?verdict, "Login selected");

        self.state.send_modify(|state| state.is_valid_login = verdict);
        verdict
    }
}

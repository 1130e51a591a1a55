use serde::{Deserialize, Serialize};

/// Credentials typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

impl LoginData {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of the last login attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginValid {
    /// Nothing submitted since the form last changed.
    #[default]
    NotChecked,
    Ok,
    Ko,
}

/// Everything the login screen renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginUiState {
    /// Whether the submit button is enabled.
    pub login_enable: bool,
    pub is_valid_login: LoginValid,
    pub login_data: LoginData,
}

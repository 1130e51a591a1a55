//! State holders behind the two screens.
//!
//! Each view model keeps its screen state in a `tokio::sync::watch` channel. Every
//! transition replaces the whole record, so `state()` always returns a consistent
//! snapshot. A subscriber is woken on change and always reads the latest state;
//! transitions that happen back to back (`Loading` then `Read` over a fast source)
//! may reach it as one. View models never hand errors back to the caller: failures
//! are logged and folded into the state.

pub mod book;
pub mod login;

pub use book::BookViewModel;
pub use login::{is_valid_email, is_valid_password, LoginViewModel};

//! Plain data: the [`Book`] entity with its payloads, the book screen state, and the
//! login form types.

pub mod book;
pub mod catalog;
pub mod login;

pub use book::*;
pub use catalog::*;
pub use login::*;

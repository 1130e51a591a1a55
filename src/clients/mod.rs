//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod book_client;

pub use actor_client::*;
pub use book_client::*;

//! # Book Actor
//!
//! The in-memory book catalog: a [`ResourceActor<Book>`] plus the rules in
//! [`entity`] and the [`BookError`] type.
//!
//! ```rust
//! use books_catalog::book_actor;
//! use books_catalog::clients::BookClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = book_actor::with_defaults(32);
//!     tokio::spawn(actor.run());
//!
//!     let books = BookClient::new(client).list_books().await?;
//!     assert_eq!(books.len(), 4);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{default_books, Book};

/// Creates an empty Book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Book>, ResourceClient<Book>) {
    ResourceActor::new(buffer_size)
}

/// Creates a Book actor seeded with the default catalog.
pub fn with_defaults(buffer_size: usize) -> (ResourceActor<Book>, ResourceClient<Book>) {
    ResourceActor::with_entities(buffer_size, default_books())
}

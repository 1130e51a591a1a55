//! Where the book view model gets its books from.
//!
//! [`BookRepository`] is the seam between the view model and a data source. Two
//! adapters implement it: [`MemoryBookRepository`] over the in-memory book actor and
//! [`RestBookRepository`] over the remote REST API.

pub mod memory;
pub mod rest;

pub use memory::MemoryBookRepository;
pub use rest::RestBookRepository;

use crate::book_actor::BookError;
use crate::model::{Book, BookId};
use async_trait::async_trait;
use thiserror::Error;

/// Failures of a book data source.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("invalid payload: {0}")]
    Decode(String),

    #[error("book not found: {0}")]
    NotFound(String),

    /// The source refused the book (e.g. a blank field).
    #[error("book rejected: {0}")]
    Rejected(String),

    /// The in-memory catalog is not running.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<BookError> for RepositoryError {
    fn from(error: BookError) -> Self {
        match error {
            BookError::NotFound(id) => RepositoryError::NotFound(id),
            BookError::MissingField(_) => RepositoryError::Rejected(error.to_string()),
            BookError::ActorCommunicationError(msg) => RepositoryError::Unavailable(msg),
        }
    }
}

/// CRUD plus search over a catalog of books.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every book, ordered as the source orders them.
    async fn list(&self) -> Result<Vec<Book>, RepositoryError>;

    async fn get(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// Stores a new book built from `draft` and returns it as stored.
    async fn create(&self, draft: &Book) -> Result<Book, RepositoryError>;

    /// Replaces the fields of the book with `book.id`.
    async fn update(&self, book: &Book) -> Result<Book, RepositoryError>;

    async fn delete(&self, id: BookId) -> Result<(), RepositoryError>;

    /// Books whose title or author matches `word`.
    async fn search(&self, word: &str) -> Result<Vec<Book>, RepositoryError>;
}

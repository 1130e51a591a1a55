//! Book repository backed by the in-memory book actor.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{BookRepository, RepositoryError};
use crate::clients::{ActorClient, BookClient};
use crate::model::{Book, BookId};

/// Serves books from the [`book_actor`](crate::book_actor) through a [`BookClient`].
///
/// `latency` is slept before every `list`, to mimic a slow source when driving the
/// loading state by hand.
#[derive(Clone)]
pub struct MemoryBookRepository {
    client: BookClient,
    latency: Duration,
}

impl MemoryBookRepository {
    pub fn new(client: BookClient) -> Self {
        Self {
            client,
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "Simulating slow source");
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.client.list_books().await?)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        Ok(self.client.get(id).await?)
    }

    /// The draft id is ignored: the actor assigns the next one.
    #[instrument(skip(self))]
    async fn create(&self, draft: &Book) -> Result<Book, RepositoryError> {
        Ok(self.client.create_book(draft.into()).await?)
    }

    #[instrument(skip(self))]
    async fn update(&self, book: &Book) -> Result<Book, RepositoryError> {
        Ok(self.client.update_book(book.id, book.into()).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        Ok(self.client.delete(id).await?)
    }

    #[instrument(skip(self))]
    async fn search(&self, word: &str) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.client.search_books(word).await?)
    }
}

//! Reqwest-backed book repository.
//!
//! Talks JSON to the `libros` endpoints under the books base URL. This adapter owns
//! transport details only: URL building, timeout and status mapping, and decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::{BookRepository, RepositoryError};
use crate::http::{body_preview, with_trailing_slash};
use crate::model::{Book, BookId};

/// Book repository over the remote catalog API.
#[derive(Clone)]
pub struct RestBookRepository {
    client: Client,
    base: Url,
}

impl RestBookRepository {
    /// Build a repository whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, RepositoryError> {
        self.base
            .join(path)
            .map_err(|e| RepositoryError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    fn book_endpoint(&self, id: BookId) -> Result<Url, RepositoryError> {
        self.endpoint(&format!("libros/{}", id.0))
    }

    /// Sends the request and hands back the status with the full body.
    async fn execute(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Vec<u8>), RepositoryError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), size = body.len(), "Response received");
        Ok((status, body.to_vec()))
    }

    async fn execute_ok(&self, request: RequestBuilder) -> Result<Vec<u8>, RepositoryError> {
        let (status, body) = self.execute(request).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl BookRepository for RestBookRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        let url = self.endpoint("libros")?;
        let body = self.execute_ok(self.client.get(url)).await?;
        let books: Vec<Book> = decode(&body)?;
        info!(size = books.len(), "Fetched books");
        Ok(books)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let url = self.book_endpoint(id)?;
        let (status, body) = self.execute(self.client.get(url)).await?;
        if status == StatusCode::NOT_FOUND {
            debug!(%id, "Not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        decode(&body).map(Some)
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &Book) -> Result<Book, RepositoryError> {
        let url = self.endpoint("libros/add")?;
        let body = self.execute_ok(self.client.post(url).json(draft)).await?;
        let created = echoed_or(&body, draft);
        info!(id = %created.id, "Created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update(&self, book: &Book) -> Result<Book, RepositoryError> {
        let url = self.book_endpoint(book.id)?;
        let body = self.execute_ok(self.client.put(url).json(book)).await?;
        let updated = echoed_or(&body, book);
        info!(id = %updated.id, "Updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        let url = self.book_endpoint(id)?;
        self.execute_ok(self.client.delete(url)).await?;
        info!(%id, "Deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, word: &str) -> Result<Vec<Book>, RepositoryError> {
        let url = self.endpoint("libros/search")?;
        let body = self
            .execute_ok(self.client.get(url).query(&[("q", word)]))
            .await?;
        let books: Vec<Book> = decode(&body)?;
        info!(size = books.len(), "Search finished");
        Ok(books)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RepositoryError> {
    serde_json::from_slice(body)
        .map_err(|e| RepositoryError::Decode(format!("invalid book JSON payload: {e}")))
}

/// Servers may answer writes with the stored book, an empty body, or something else.
fn echoed_or(body: &[u8], sent: &Book) -> Book {
    match serde_json::from_slice::<Book>(body) {
        Ok(book) => book,
        Err(e) => {
            if !body.is_empty() {
                warn!(error = %e, "Response body is not a book, keeping the sent one");
            }
            sent.clone()
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> RepositoryError {
    if error.is_timeout() {
        return RepositoryError::Timeout(error.to_string());
    }
    RepositoryError::Transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RepositoryError {
    RepositoryError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

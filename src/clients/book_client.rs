//! # Book Client
//!
//! Domain-level API over a `ResourceClient<Book>`.
use crate::book_actor::BookError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    /// Entity rejections keep their own variant; everything else is a communication error.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(rejection) = e.entity_error::<BookError>() {
            return rejection.clone();
        }
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BookClient {
    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The whole catalog in id order.
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.list(None).await
    }

    /// Books whose title or author contains `word`, ignoring case.
    pub async fn search_books(&self, word: &str) -> Result<Vec<Book>, BookError> {
        self.list(Some(word)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_list, expect_update, MockClient};

    #[tokio::test]
    async fn test_search_sends_query_to_actor() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.search_books("clear").await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(query.as_deref(), Some("clear"));
        responder
            .send(Ok(vec![Book::new(4, "Hábitos atómicos", "James Clear")]))
            .unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_list_books_sends_no_query() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.list_books().await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(query, None);
        responder.send(Ok(crate::model::default_books())).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_update_carries_both_fields() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);
        let draft = Book::new(2, "Nuevo", "Autor");

        let task = {
            let draft = draft.clone();
            tokio::spawn(async move { book_client.update_book(draft.id, (&draft).into()).await })
        };

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, BookId(2));
        assert_eq!(update.title.as_deref(), Some("Nuevo"));
        assert_eq!(update.author.as_deref(), Some("Autor"));
        responder.send(Ok(draft.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), draft);
    }

    #[tokio::test]
    async fn test_entity_rejection_keeps_its_variant() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(BookError::MissingField(
                "author",
            ))));
        mock.expect_delete(BookId(9))
            .return_err(FrameworkError::NotFound("book_9".into()));
        mock.expect_get(BookId(1))
            .return_err(FrameworkError::ActorDropped);

        let client = BookClient::new(mock.client());
        let created = client
            .create_book(BookCreate {
                title: "t".into(),
                author: String::new(),
            })
            .await;
        assert_eq!(created, Err(BookError::MissingField("author")));
        assert_eq!(
            client.delete(BookId(9)).await,
            Err(BookError::NotFound("book_9".into()))
        );
        assert!(matches!(
            client.get(BookId(1)).await,
            Err(BookError::ActorCommunicationError(_))
        ));

        mock.verify();
    }
}

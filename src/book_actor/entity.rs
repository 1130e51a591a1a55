//! [`ActorEntity`] implementation for [`Book`].
//!
//! Both creation and updates refuse an empty title or author, so the in-memory
//! catalog never stores an incomplete book.

use super::error::BookError;
use crate::framework::ActorEntity;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;

fn require(field: &'static str, value: &str) -> Result<(), BookError> {
    if value.is_empty() {
        return Err(BookError::MissingField(field));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Error = BookError;

    fn id(&self) -> BookId {
        self.id
    }

    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, Self::Error> {
        require("title", &params.title)?;
        require("author", &params.author)?;
        Ok(Self::new(id, params.title, params.author))
    }

    /// Case-insensitive substring match on title or author.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.title.to_lowercase().contains(&query) || self.author.to_lowercase().contains(&query)
    }

    async fn on_update(&mut self, update: BookUpdate) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            require("title", &title)?;
            self.title = title;
        }
        if let Some(author) = update.author {
            require("author", &author)?;
            self.author = author;
        }
        Ok(())
    }
}

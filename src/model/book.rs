/// Represents a book in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing the in-memory catalog to live in a [`ResourceActor`](crate::framework::ResourceActor).
///
/// On the wire the REST API names the fields `titulo` and `autor`.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<BookId> for u32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }

    /// An empty draft carrying only an id.
    pub fn blank(id: impl Into<BookId>) -> Self {
        Self::new(id, "", "")
    }

    /// Whether both title and author are non-empty.
    pub fn has_input_data(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty()
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::blank(0)
    }
}

/// Payload for creating a new book.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
}

/// Payload for updating an existing book.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl From<&Book> for BookCreate {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

impl From<&Book> for BookUpdate {
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
        }
    }
}

/// The catalog shown before anything is loaded from elsewhere.
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new(1, "La grieta del silencio", "Javier Castillo"),
        Book::new(2, "Un animal salvaje", "Joel Dicker"),
        Book::new(3, "Casa de tierra y sangre", "Sarah J. Maas"),
        Book::new(4, "Hábitos atómicos", "James Clear"),
    ]
}

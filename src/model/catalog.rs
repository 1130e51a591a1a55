use super::Book;

/// Which variant of the book screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookAction {
    Loading,
    #[default]
    Read,
    Create,
    Modify,
    Error,
}

/// Everything the book screen renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookState {
    pub books: Vec<Book>,
    /// The draft being typed in the create/modify form.
    pub new_book: Book,
    pub action: BookAction,
    pub search_word: String,
}

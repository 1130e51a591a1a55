use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::model::{Book, BookAction, BookId, BookState};
use crate::repository::{BookRepository, RepositoryError};

/// Drives the book list and its create/modify form.
///
/// Writes go through the repository and are followed by a full reload, so the list
/// always reflects what the source holds. A failed write leaves the screen in
/// [`BookAction::Error`] without reloading.
pub struct BookViewModel {
    repository: Arc<dyn BookRepository>,
    state: watch::Sender<BookState>,
}

impl BookViewModel {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        let (state, _) = watch::channel(BookState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> BookState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BookState> {
        self.state.subscribe()
    }

    /// Builds the next state from the current one and publishes it.
    fn transition(&self, next: impl FnOnce(&BookState) -> BookState) {
        let next = {
            let current = self.state.borrow();
            next(&current)
        };
        debug!(action = ?next.action, size = next.books.len(), "State changed");
        self.state.send_replace(next);
    }

    fn set_action(&self, action: BookAction) {
        self.transition(|s| BookState {
            action,
            ..s.clone()
        });
    }

    fn fail(&self, operation: &'static str, error: &RepositoryError) {
        warn!(operation, error = %error, "Operation failed");
        self.set_action(BookAction::Error);
    }

    /// Id the next created book gets: last listed id + 1, or 1 for an empty list.
    pub fn next_id(&self) -> BookId {
        self.state
            .borrow()
            .books
            .last()
            .map_or(BookId(1), |book| BookId(book.id.0.saturating_add(1)))
    }

    #[instrument(skip(self))]
    pub async fn load_books(&self) {
        self.set_action(BookAction::Loading);
        match self.repository.list().await {
            Ok(books) => {
                info!(size = books.len(), "Loaded");
                self.transition(|s| BookState {
                    books,
                    new_book: Book::blank(1),
                    action: BookAction::Read,
                    ..s.clone()
                });
            }
            Err(e) => self.fail("load", &e),
        }
    }

    /// Stores the draft as a new book. Does nothing while a field is empty.
    #[instrument(skip(self))]
    pub async fn add_book(&self) {
        let draft = self.state().new_book;
        if !draft.has_input_data() {
            debug!("Draft incomplete, nothing to add");
            return;
        }
        let book = Book::new(self.next_id(), draft.title, draft.author);
        match self.repository.create(&book).await {
            Ok(created) => {
                info!(id = %created.id, "Added");
                self.load_books().await;
            }
            Err(e) => self.fail("add", &e),
        }
    }

    /// Writes the draft over the book with the same id. Does nothing while a field is empty.
    #[instrument(skip(self))]
    pub async fn update_book(&self) {
        let draft = self.state().new_book;
        if !draft.has_input_data() {
            debug!("Draft incomplete, nothing to update");
            return;
        }
        match self.repository.update(&draft).await {
            Ok(updated) => {
                info!(id = %updated.id, "Updated");
                self.load_books().await;
            }
            Err(e) => self.fail("update", &e),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_book(&self, book: &Book) {
        match self.repository.delete(book.id).await {
            Ok(()) => {
                info!(id = %book.id, "Removed");
                self.load_books().await;
            }
            Err(e) => self.fail("remove", &e),
        }
    }

    /// Replaces the list with the books matching `word`. The current action is kept.
    #[instrument(skip(self))]
    pub async fn search_action(&self, word: &str) {
        self.transition(|s| BookState {
            search_word: word.to_string(),
            ..s.clone()
        });
        match self.repository.search(word).await {
            Ok(books) => {
                info!(size = books.len(), "Search done");
                self.transition(|s| BookState { books, ..s.clone() });
            }
            Err(e) => self.fail("search", &e),
        }
    }

    /// Opens the create form with an empty draft.
    pub fn new_action(&self) {
        let id = self.next_id();
        self.transition(|s| BookState {
            new_book: Book::blank(id),
            action: BookAction::Create,
            ..s.clone()
        });
    }

    /// Opens the modify form on a copy of `book`.
    pub fn edit_action(&self, book: &Book) {
        self.transition(|s| BookState {
            new_book: book.clone(),
            action: BookAction::Modify,
            ..s.clone()
        });
    }

    pub fn cancel_action(&self) {
        self.set_action(BookAction::Read);
    }

    pub fn set_new_book_title(&self, title: &str) {
        self.transition(|s| {
            let mut next = s.clone();
            next.new_book.title = title.to_string();
            next
        });
    }

    pub fn set_new_book_author(&self, author: &str) {
        self.transition(|s| {
            let mut next = s.clone();
            next.new_book.author = author.to_string();
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book_actor;
    use crate::clients::BookClient;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::repository::MemoryBookRepository;

    fn seeded() -> BookViewModel {
        let (actor, client) = book_actor::with_defaults(16);
        tokio::spawn(actor.run());
        BookViewModel::new(Arc::new(MemoryBookRepository::new(BookClient::new(client))))
    }

    fn mocked(mock: &MockClient<Book>) -> BookViewModel {
        BookViewModel::new(Arc::new(MemoryBookRepository::new(BookClient::new(
            mock.client(),
        ))))
    }

    #[test]
    fn test_initial_state() {
        let vm = BookViewModel::new(Arc::new(MemoryBookRepository::new(BookClient::new(
            book_actor::new(1).1,
        ))));
        let state = vm.state();
        assert_eq!(state.action, BookAction::Read);
        assert!(state.books.is_empty());
        assert_eq!(state.new_book, Book::blank(0));
        assert_eq!(vm.next_id(), BookId(1));
    }

    #[tokio::test]
    async fn test_load_passes_through_loading() {
        let (actor, client) = book_actor::with_defaults(16);
        tokio::spawn(actor.run());
        // The delay gives the subscriber a chance to observe Loading before Read
        let repository = MemoryBookRepository::new(BookClient::new(client))
            .with_latency(std::time::Duration::from_millis(50));
        let vm = BookViewModel::new(Arc::new(repository));
        let mut rx = vm.subscribe();

        let seen = tokio::spawn(async move {
            let mut actions = Vec::new();
            while rx.changed().await.is_ok() {
                let action = rx.borrow_and_update().action;
                actions.push(action);
                if action == BookAction::Read {
                    break;
                }
            }
            actions
        });
        vm.load_books().await;

        assert_eq!(seen.await.unwrap().first(), Some(&BookAction::Loading));
        let state = vm.state();
        assert_eq!(state.action, BookAction::Read);
        assert_eq!(state.books.len(), 4);
        assert_eq!(state.new_book, Book::blank(1));
    }

    #[tokio::test]
    async fn test_add_book_gets_next_id() {
        let vm = seeded();
        vm.load_books().await;

        vm.new_action();
        assert_eq!(vm.state().action, BookAction::Create);
        assert_eq!(vm.state().new_book, Book::blank(5));

        vm.set_new_book_title("Dune");
        vm.set_new_book_author("Frank Herbert");
        vm.add_book().await;

        let state = vm.state();
        assert_eq!(state.action, BookAction::Read);
        assert_eq!(state.books.len(), 5);
        assert_eq!(state.books.last(), Some(&Book::new(5, "Dune", "Frank Herbert")));
    }

    #[tokio::test]
    async fn test_incomplete_draft_is_ignored() {
        let vm = seeded();
        vm.load_books().await;
        vm.new_action();
        vm.set_new_book_title("Sin autor");
        vm.add_book().await;

        let state = vm.state();
        assert_eq!(state.books.len(), 4);
        assert_eq!(state.action, BookAction::Create);
    }

    #[tokio::test]
    async fn test_whitespace_title_is_added() {
        let vm = seeded();
        vm.load_books().await;
        vm.new_action();
        vm.set_new_book_title("   ");
        vm.set_new_book_author("Someone");
        vm.add_book().await;

        let state = vm.state();
        assert_eq!(state.books.len(), 5);
        assert_eq!(state.books.last(), Some(&Book::new(5, "   ", "Someone")));
    }

    #[tokio::test]
    async fn test_edit_then_update_changes_only_target() {
        let vm = seeded();
        vm.load_books().await;
        let before = vm.state().books;

        vm.edit_action(&before[1]);
        assert_eq!(vm.state().action, BookAction::Modify);
        vm.set_new_book_title("Un animal salvaje (bolsillo)");
        vm.update_book().await;

        let after = vm.state().books;
        assert_eq!(after.len(), before.len());
        assert_eq!(after[1].title, "Un animal salvaje (bolsillo)");
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2..], before[2..]);
    }

    #[tokio::test]
    async fn test_cancel_returns_to_read() {
        let vm = seeded();
        vm.load_books().await;
        vm.new_action();
        vm.cancel_action();
        assert_eq!(vm.state().action, BookAction::Read);
    }

    #[tokio::test]
    async fn test_remove_drops_the_id() {
        let vm = seeded();
        vm.load_books().await;
        let target = vm.state().books[2].clone();

        vm.remove_book(&target).await;

        let books = vm.state().books;
        assert_eq!(books.len(), 3);
        assert!(books.iter().all(|b| b.id != target.id));
    }

    #[tokio::test]
    async fn test_search_keeps_action() {
        let vm = seeded();
        vm.load_books().await;

        vm.search_action("castillo").await;
        let state = vm.state();
        assert_eq!(state.search_word, "castillo");
        assert_eq!(state.books, vec![Book::new(1, "La grieta del silencio", "Javier Castillo")]);
        assert_eq!(state.action, BookAction::Read);

        vm.search_action("tolkien").await;
        assert!(vm.state().books.is_empty());
        assert_eq!(vm.state().action, BookAction::Read);
    }

    #[tokio::test]
    async fn test_failed_load_is_error() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let vm = mocked(&mock);
        vm.load_books().await;

        assert_eq!(vm.state().action, BookAction::Error);
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_remove_does_not_reload() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_delete(BookId(3))
            .return_err(FrameworkError::NotFound("book_3".into()));

        let vm = mocked(&mock);
        vm.remove_book(&Book::new(3, "t", "a")).await;

        assert_eq!(vm.state().action, BookAction::Error);
        mock.verify();
    }
}

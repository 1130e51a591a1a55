use std::sync::Arc;

use books_catalog::clients::BookClient;
use books_catalog::config::AppConfig;
use books_catalog::framework::mock::MockClient;
use books_catalog::framework::FrameworkError;
use books_catalog::lifecycle::BookSystem;
use books_catalog::model::{Book, BookAction, BookId};
use books_catalog::repository::MemoryBookRepository;
use books_catalog::view_model::{is_valid_email, is_valid_password, BookViewModel};
use rstest::rstest;

async fn loaded_system() -> BookSystem {
    let system = BookSystem::new(&AppConfig::default()).expect("memory system starts");
    system.book_view_model.load_books().await;
    system
}

#[tokio::test]
async fn test_add_grows_list_with_fresh_id() {
    let system = loaded_system().await;
    let books = &system.book_view_model;
    let before = books.state().books;

    books.new_action();
    books.set_new_book_title("Dune");
    books.set_new_book_author("Frank Herbert");
    books.add_book().await;

    let after = books.state().books;
    assert_eq!(after.len(), before.len() + 1);
    let added = after.last().unwrap();
    assert!(before.iter().all(|b| b.id != added.id));
    assert_eq!((added.title.as_str(), added.author.as_str()), ("Dune", "Frank Herbert"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_shrinks_list() {
    let system = loaded_system().await;
    let books = &system.book_view_model;
    let target = books.state().books[0].clone();

    books.remove_book(&target).await;

    let after = books.state().books;
    assert_eq!(after.len(), 3);
    assert!(!after.contains(&target));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_keeps_size_and_other_books() {
    let system = loaded_system().await;
    let books = &system.book_view_model;
    let before = books.state().books;

    books.edit_action(&before[3]);
    books.set_new_book_author("J. Clear");
    books.update_book().await;

    let after = books.state().books;
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        if old.id == BookId(4) {
            assert_eq!(new.author, "J. Clear");
            assert_eq!(new.title, old.title);
        } else {
            assert_eq!(old, new);
        }
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_whitespace_fields_count_as_input() {
    let system = loaded_system().await;
    let books = &system.book_view_model;

    books.new_action();
    books.set_new_book_title("   ");
    books.set_new_book_author("Someone");
    books.add_book().await;

    assert_eq!(books.state().books.len(), 5);
    system.shutdown().await.unwrap();
}

#[rstest]
#[case("", "Frank Herbert")]
#[case("Dune", "")]
#[tokio::test]
async fn test_incomplete_draft_changes_nothing(#[case] title: &str, #[case] author: &str) {
    let system = loaded_system().await;
    let books = &system.book_view_model;

    books.new_action();
    books.set_new_book_title(title);
    books.set_new_book_author(author);
    books.add_book().await;
    assert_eq!(books.state().books.len(), 4);

    books.edit_action(&Book::new(1, title, author));
    books.update_book().await;
    assert_eq!(books.state().books[0].title, "La grieta del silencio");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_catalog_starts_ids_at_one() {
    let mut mock = MockClient::<Book>::new();
    mock.expect_list().return_ok(vec![]);

    let vm = BookViewModel::new(Arc::new(MemoryBookRepository::new(BookClient::new(
        mock.client(),
    ))));
    vm.load_books().await;
    vm.new_action();

    assert_eq!(vm.state().new_book, Book::blank(1));
    mock.verify();
}

#[tokio::test]
async fn test_failed_add_leaves_error_state() {
    let mut mock = MockClient::<Book>::new();
    mock.expect_list()
        .return_ok(vec![Book::new(1, "La grieta del silencio", "Javier Castillo")]);
    mock.expect_create().return_err(FrameworkError::ActorClosed);

    let vm = BookViewModel::new(Arc::new(MemoryBookRepository::new(BookClient::new(
        mock.client(),
    ))));
    vm.load_books().await;
    vm.new_action();
    vm.set_new_book_title("Dune");
    vm.set_new_book_author("Frank Herbert");
    vm.add_book().await;

    let state = vm.state();
    assert_eq!(state.action, BookAction::Error);
    assert_eq!(state.books.len(), 1);
    mock.verify();
}

#[rstest]
#[case("a@b.com", true)]
#[case("lector.habitual+novelas@biblioteca.es", true)]
#[case("user_1%x@mail-server.co.uk", true)]
#[case("a@b", false)]
#[case("@b.com", false)]
#[case("a b@c.com", false)]
#[case("a@-b.com", false)]
#[case("a@b.com.", false)]
#[case("", false)]
fn test_email_validation(#[case] email: &str, #[case] valid: bool) {
    assert_eq!(is_valid_email(email), valid);
}

#[rstest]
#[case("", false)]
#[case("12", false)]
#[case("123", true)]
#[case("contraseña", true)]
fn test_password_validation(#[case] password: &str, #[case] valid: bool) {
    assert_eq!(is_valid_password(password), valid);
}

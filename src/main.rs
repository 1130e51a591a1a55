//! Walks through the whole flow once against the configured source: log in, load the
//! catalog, add a book, edit it, search, and remove it.

use books_catalog::config::AppConfig;
use books_catalog::lifecycle::{setup_tracing, BookSystem};
use books_catalog::model::{BookAction, LoginValid};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(source = ?config.source, "Starting books catalog");

    let system = BookSystem::new(&config)?;

    // Log every state the book screen goes through
    let mut states = system.book_view_model.subscribe();
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            info!(action = ?state.action, size = state.books.len(), "Book screen");
        }
    });

    let login = &system.login_view_model;
    login.on_login_changed(&config.credentials.email, &config.credentials.password);
    if !login.state().login_enable {
        warn!("Login form is not valid");
    }
    let verdict = login
        .on_login_selected()
        .instrument(tracing::info_span!("login"))
        .await;
    if verdict != LoginValid::Ok {
        error!(?verdict, "Login refused");
        system.shutdown().await?;
        return Ok(());
    }

    let books = &system.book_view_model;
    async {
        books.load_books().await;

        books.new_action();
        books.set_new_book_title("El nombre del viento");
        books.set_new_book_author("Patrick Rothfuss");
        books.add_book().await;
    }
    .instrument(tracing::info_span!("create_book"))
    .await;

    let added = books.state().books.last().cloned();
    if let Some(book) = added {
        async {
            books.edit_action(&book);
            books.set_new_book_title("El temor de un hombre sabio");
            books.update_book().await;

            books.search_action("rothfuss").await;
            info!(found = books.state().books.len(), "Search finished");

            books.remove_book(&book).await;
        }
        .instrument(tracing::info_span!("edit_book"))
        .await;
    }

    if books.state().action == BookAction::Error {
        error!("Catalog ended in error state");
    }

    system.shutdown().await?;
    watcher.await?;

    info!("Application completed successfully");
    Ok(())
}

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! # State transitions and request outcomes
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every state change of the view models
//! RUST_LOG=debug cargo run
//!
//! # Only the REST adapters
//! RUST_LOG=books_catalog::repository=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a load followed by an add reads roughly like:
//!
//! ```text
//! INFO load_books: Fetched books size=4
//! INFO load_books: Loaded size=4
//! INFO add_book: Created id=book_5
//! INFO add_book: Added id=book_5
//! ```
//!
//! Spans come from `#[instrument]` on the client, repository and view model methods,
//! so each line shows which user action it belongs to.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and spans already say where a line comes from
        .compact()
        .init();
}

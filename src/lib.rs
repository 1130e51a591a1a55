//! # Books Catalog
//!
//! Log in, then browse and edit a catalog of books. The catalog comes either from an
//! in-memory store owned by a single actor task or from a remote REST API.
//!
//! ## Design
//!
//! Two view models hold the screen state:
//!
//! - [`LoginViewModel`](view_model::LoginViewModel) checks the form locally and asks an
//!   [`Authenticator`](auth::Authenticator) for a verdict on submit.
//! - [`BookViewModel`](view_model::BookViewModel) runs the read/create/modify screen
//!   over a [`BookRepository`](repository::BookRepository).
//!
//! State lives in `tokio::sync::watch` channels and is replaced on every transition,
//! so a UI can subscribe and redraw. Failures never escape a view model: they are
//! logged and folded into the state (`BookAction::Error`, `LoginValid::Ko`).
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic `ResourceActor<T>` that owns an ordered store and serves CRUD requests
//! over a channel, one at a time, without locks.
//!
//! ### 2. The Catalog ([`book_actor`], [`clients`])
//! [`Book`](model::Book) implemented as an [`ActorEntity`](framework::ActorEntity), with
//! its validation rules, and a typed [`BookClient`](clients::BookClient) on top.
//!
//! ### 3. The Sources ([`repository`], [`auth`])
//! In-memory and REST adapters behind the two traits the view models depend on.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`BookSystem`](lifecycle::BookSystem) wires everything for an
//! [`AppConfig`](config::AppConfig) and shuts the actor down cleanly.
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory catalog
//! RUST_LOG=info cargo run
//!
//! # Against a running API
//! BOOKS_SOURCE=rest BOOKS_API_URL=http://localhost:8080/api/biblioteca/ cargo run
//! ```

pub mod auth;
pub mod book_actor;
pub mod clients;
pub mod config;
pub mod framework;
mod http;
pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod view_model;

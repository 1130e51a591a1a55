//! Generic actor framework for in-memory resources.
//!
//! A [`ResourceActor`] owns an ordered store of [`ActorEntity`] values and serves
//! list/get/create/update/delete requests sent through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store
//! - [`ResourceClient`] - Typed handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! With the `testing` feature, the `mock` module provides `MockClient` for testing
//! code around a client without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
#[cfg(any(test, feature = "testing"))]
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

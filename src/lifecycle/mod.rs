//! Startup and shutdown of the whole catalog.

pub mod book_system;
pub mod tracing;

pub use book_system::{BookSystem, LifecycleError};
pub use self::tracing::setup_tracing;

//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to live inside a [`ResourceActor`](super::ResourceActor).
//! It names the id type, the create/update payloads and the error type, and provides
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`) where an entity enforces its rules.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::matches`] (everything matches)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Override them only when the entity needs to filter or validate.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// The actor keeps entities ordered by id and derives new ids from the highest one
/// it holds, so `Id` must be ordered and convertible to and from `u32`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Copy + Ord + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum per entity rather than one per operation: clients match on a
    /// single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from the assigned id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the result of a filtered `List`.
    fn matches(&self, _query: &str) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

//! Shared read/delete surface of every typed client.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Operations that look the same for any entity: listing, lookup by id and removal.
///
/// An implementor supplies the inner [`ResourceClient`] and how [`FrameworkError`]s
/// become its own error type. Writes stay on the concrete client because their
/// payloads differ per entity.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError) -> Self::Error;

    /// Entities in id order, only those matching `query` when one is given.
    #[instrument(skip(self))]
    async fn list(&self, query: Option<&str>) -> Result<Vec<T>, Self::Error> {
        debug!("Sending request");
        self.inner()
            .list(query.map(str::to_owned))
            .await
            .map_err(Self::map_error)
    }

    /// `Ok(None)` when nothing is stored under `id`.
    #[instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

//! # Generic Messages
//!
//! The messages exchanged between a `ResourceClient` and its `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The variants map onto CRUD: `List`/`Get` read, `Create` starts a resource's
/// lifecycle, `Update` mutates it and `Delete` ends it. Payload types come from the
/// [`ActorEntity`] associated types, so a request can only carry the payload its
/// entity declares.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        query: Option<String>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

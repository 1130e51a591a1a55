//! # Generic Actor Server
//!
//! `ResourceActor` owns an ordered in-memory store of entities and processes
//! requests one at a time, so the store needs no lock.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the `store` and the receiving end of the
/// channel. Every request is handled to completion before the next one is read,
/// which is what makes "last write wins" the only consistency rule callers need.
///
/// # Usage Pattern
///
/// 1. Call [`ResourceActor::new`] (or [`ResourceActor::with_entities`]) to get the actor and its client.
/// 2. Spawn `actor.run()` on the runtime.
/// 3. Clone the client wherever it is needed. Dropping every clone stops the actor.
///
/// # Ids
///
/// The store is a `BTreeMap`, so listing returns entities in id order. A created
/// entity receives the highest stored id plus one (1 for an empty store).
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty actor and its client.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_entities(buffer_size, Vec::new())
    }

    /// Creates an actor whose store starts with `entities`, keyed by their own ids.
    pub fn with_entities(
        buffer_size: usize,
        entities: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        let actor = Self { receiver, store };
        (actor, ResourceClient::new(sender))
    }

    fn next_id(&self) -> Result<T::Id, FrameworkError> {
        match self.store.keys().next_back() {
            Some(last) => {
                let last: u32 = (*last).into();
                last.checked_add(1)
                    .map(T::Id::from)
                    .ok_or(FrameworkError::IdSpaceExhausted)
            }
            None => Ok(T::Id::from(1)),
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name ("Book" rather than "books_catalog::model::book::Book")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = match query.as_deref() {
                        Some(query) => self
                            .store
                            .values()
                            .filter(|item| item.matches(query))
                            .cloned()
                            .collect(),
                        None => self.store.values().cloned().collect(),
                    };
                    debug!(entity_type, ?query, found = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.next_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id, params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create().await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id, item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks work on a copy so a rejected update leaves the stored entity intact
                        let mut candidate = item.clone();
                        if let Err(e) = candidate.on_update(update).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = candidate.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(candidate));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete().await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

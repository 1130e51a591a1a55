use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::auth::{AuthError, Authenticator, RestAuthenticator, StaticAuthenticator};
use crate::book_actor;
use crate::clients::BookClient;
use crate::config::{AppConfig, BookSource, ConfigError};
use crate::repository::{BookRepository, MemoryBookRepository, RestBookRepository};
use crate::view_model::{BookViewModel, LoginViewModel};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot build HTTP client: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("actor task failed: {0}")]
    TaskFailed(String),
}

/// The wired-up application: both view models over the configured source.
///
/// # Example
///
/// ```ignore
/// let system = BookSystem::new(&AppConfig::default())?;
///
/// system.login_view_model.on_login_changed("a@b.com", "123");
/// system.login_view_model.on_login_selected().await;
/// system.book_view_model.load_books().await;
///
/// system.shutdown().await?;
/// ```
pub struct BookSystem {
    pub book_view_model: BookViewModel,
    pub login_view_model: LoginViewModel,

    /// Task handles of spawned actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl BookSystem {
    /// Builds the repository and authenticator for `config.source`.
    ///
    /// For [`BookSource::Memory`] the book actor is spawned here, so this must be
    /// called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, LifecycleError> {
        let mut handles = Vec::new();

        let (repository, authenticator): (Arc<dyn BookRepository>, Arc<dyn Authenticator>) =
            match config.source {
                BookSource::Memory => {
                    let (actor, client) = book_actor::with_defaults(config.channel_buffer.max(1));
                    handles.push(tokio::spawn(actor.run()));

                    let repository = MemoryBookRepository::new(BookClient::new(client))
                        .with_latency(config.memory_latency);
                    let authenticator = StaticAuthenticator::new(config.credentials.clone());
                    (Arc::new(repository), Arc::new(authenticator))
                }
                BookSource::Rest => {
                    let repository =
                        RestBookRepository::new(config.books_endpoint()?, config.http_timeout)
                            .map_err(|e| LifecycleError::HttpClient(e.to_string()))?;
                    let authenticator =
                        RestAuthenticator::new(config.admin_endpoint()?, config.http_timeout)?;
                    (Arc::new(repository), Arc::new(authenticator))
                }
            };
        info!(source = ?config.source, "Book system started");

        Ok(Self {
            book_view_model: BookViewModel::new(repository),
            login_view_model: LoginViewModel::new(authenticator),
            handles,
        })
    }

    /// Drops the view models, which closes the actor channel, then waits for every
    /// spawned task. A task that panicked is reported as [`LifecycleError::TaskFailed`].
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.book_view_model);
        drop(self.login_view_model);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookAction, LoginValid};

    #[tokio::test]
    async fn test_memory_system_round_trip() {
        let system = BookSystem::new(&AppConfig::default()).unwrap();

        system.login_view_model.on_login_changed("a@b.com", "123");
        assert_eq!(system.login_view_model.on_login_selected().await, LoginValid::Ok);

        system.book_view_model.load_books().await;
        assert_eq!(system.book_view_model.state().action, BookAction::Read);
        assert_eq!(system.book_view_model.state().books.len(), 4);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rest_system_rejects_bad_url() {
        let config = AppConfig::default()
            .with_source(BookSource::Rest)
            .with_books_url("::nope::");
        assert!(matches!(
            BookSystem::new(&config),
            Err(LifecycleError::Config(ConfigError::InvalidUrl { .. }))
        ));
    }

    #[tokio::test]
    async fn test_rest_system_spawns_nothing() {
        let config = AppConfig::default().with_source(BookSource::Rest);
        let system = BookSystem::new(&config).unwrap();
        assert!(system.handles.is_empty());
        system.shutdown().await.unwrap();
    }
}

use crate::clients::UserClient;
use crate::config::{Config, StoreConfig};
use crate::source::{HttpUserSource, SourceError, UserSource};
use crate::store::{spawn_loader, LoadOutcome, StoreActor};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// The application root: builds the store once and hands out its client.
///
/// `ProfileManager` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it again
/// - **Dependency Wiring**: every consumer gets a [`UserClient`] clone from here
///   instead of looking the store up
/// - **Initial Load**: running the load lifecycle exactly once per store
///
/// # Example
///
/// ```ignore
/// let mut manager = ProfileManager::from_config(&config)?;
/// manager.wait_loaded().await;
///
/// let users = manager.user_client.users().await?;
///
/// manager.shutdown().await?;
/// ```
pub struct ProfileManager {
    /// Client for the user collection store
    pub user_client: UserClient,

    /// Store actor task (awaited on shutdown)
    actor: JoinHandle<()>,

    /// The initial load, until it has been awaited
    loader: Option<JoinHandle<LoadOutcome>>,

    outcome: Option<LoadOutcome>,
}

impl ProfileManager {
    /// Spawns the store and immediately starts loading from `source`.
    pub fn start(config: &StoreConfig, source: Arc<dyn UserSource>) -> Self {
        let (actor, store) = StoreActor::new(config.buffer_size);
        let actor = tokio::spawn(actor.run());
        let loader = spawn_loader(store.clone(), source);

        Self {
            user_client: UserClient::new(store),
            actor,
            loader: Some(loader),
            outcome: None,
        }
    }

    /// Starts against the HTTP endpoint named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let source = HttpUserSource::new(&config.source)?;
        Ok(Self::start(&config.store, Arc::new(source)))
    }

    /// Waits for the initial load to finish and reports how it ended.
    ///
    /// Later calls return the same outcome without waiting.
    pub async fn wait_loaded(&mut self) -> LoadOutcome {
        if let Some(loader) = self.loader.take() {
            let outcome = loader.await.unwrap_or_else(|e| {
                error!("Load task failed: {:?}", e);
                LoadOutcome::Detached
            });
            self.outcome = Some(outcome);
        }
        self.outcome.clone().unwrap_or(LoadOutcome::Detached)
    }

    /// Gracefully shuts down the store.
    ///
    /// An initial load that is still pending is abandoned; its result is never
    /// written. Then the store is closed and its task awaited.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store stopped cleanly
    /// - `Err(String)` if the store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down profile manager...");

        if let Some(loader) = self.loader {
            if !loader.is_finished() {
                warn!("Abandoning outstanding load");
            }
            loader.abort();
        }

        if self.user_client.store().close().await.is_err() {
            warn!("Store already stopped");
        }
        drop(self.user_client);

        if let Err(e) = self.actor.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

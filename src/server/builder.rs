//! Server assembly: config → storage backend → store → router

use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{AppConfig, StorageBackend};
use crate::core::events::EventBus;
use crate::server::handlers::{AppState, build_router};
use crate::storage::{CollectionStorage, InMemoryStorage};
use crate::store::RestaurantStore;

/// Fluent builder wiring the application together.
///
/// ```rust,ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("dinewheel.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    storage: Option<Arc<dyn CollectionStorage>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            storage: None,
        }
    }

    /// Use the given configuration instead of the defaults.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a persistence collaborator, overriding the configured backend.
    pub fn with_storage<S: CollectionStorage + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Open the storage backend named by the configuration.
    fn open_storage(&self) -> Result<Arc<dyn CollectionStorage>> {
        match self.config.storage.backend {
            StorageBackend::Memory => Ok(Arc::new(InMemoryStorage::new())),
            #[cfg(feature = "lmdb")]
            StorageBackend::Lmdb => {
                let path = self
                    .config
                    .storage
                    .path
                    .as_ref()
                    .ok_or_else(|| anyhow!("storage.path is required for the lmdb backend"))?;
                Ok(Arc::new(crate::storage::LmdbStorage::open(path)?))
            }
            #[cfg(not(feature = "lmdb"))]
            StorageBackend::Lmdb => Err(anyhow!(
                "lmdb backend requested but this build lacks the 'lmdb' feature"
            )),
        }
    }

    /// Assemble the router and store, loading the persisted collection.
    pub async fn build(self) -> Result<(Router, Arc<RestaurantStore>)> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => self.open_storage()?,
        };

        let events = EventBus::new(self.config.event_capacity);
        let store = Arc::new(RestaurantStore::with_events(storage, events));
        store.load().await?;

        let router = build_router(AppState {
            store: store.clone(),
        });
        Ok((router, store))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and handles SIGTERM and Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.listen_addr.clone();
        let (app, _store) = self.build().await?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

//! Lazily established, shared database handle.
//!
//! A `ConnectionManager` is built once at startup and passed to whoever needs
//! the database. The first call to [`ConnectionManager::get_instance`] reads
//! the settings, connects and bootstraps; every later call returns the same
//! handle. Concurrent first calls are serialized so only one client is ever
//! established.

use super::schema::FederationDatabase;
use crate::config::MongoSettings;
use crate::error::Result;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

type SettingsSource = Box<dyn Fn() -> Result<MongoSettings> + Send + Sync>;

pub struct ConnectionManager {
    source: SettingsSource,
    instance: OnceCell<Arc<FederationDatabase>>,
    clients_created: AtomicUsize,
}

impl ConnectionManager {
    /// Manager for already resolved settings.
    pub fn new(settings: MongoSettings) -> Self {
        Self::from_source(move || Ok(settings.clone()))
    }

    /// Manager that loads settings from a config file (and environment) on
    /// first use.
    pub fn from_config(path: Option<PathBuf>) -> Self {
        Self::from_source(move || MongoSettings::load(path.as_deref()))
    }

    /// Manager with a custom settings source. The source is only invoked while
    /// the handle is being established.
    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn() -> Result<MongoSettings> + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
            instance: OnceCell::new(),
            clients_created: AtomicUsize::new(0),
        }
    }

    /// Shared database handle, established on first call.
    ///
    /// Configuration and connection failures are returned to the caller and
    /// leave the manager uninitialized, so a later call tries again.
    pub async fn get_instance(&self) -> Result<Arc<FederationDatabase>> {
        let db = self
            .instance
            .get_or_try_init(|| async {
                let settings = (self.source)()?;
                debug!(database = %settings.database, "establishing database handle");
                let db = FederationDatabase::connect(&settings).await?;
                self.clients_created.fetch_add(1, Ordering::SeqCst);
                Ok::<_, crate::error::FederationError>(Arc::new(db))
            })
            .await?;
        Ok(Arc::clone(db))
    }

    /// Handle if already established, without connecting.
    pub fn get(&self) -> Option<Arc<FederationDatabase>> {
        self.instance.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.initialized()
    }

    /// Number of clients this manager has established.
    pub fn clients_created(&self) -> usize {
        self.clients_created.load(Ordering::SeqCst)
    }

    /// Close the underlying client if one was established.
    ///
    /// Idempotent. The closed handle stays installed; queries on it fail with
    /// [`crate::FederationError::Closed`].
    pub async fn close(&self) {
        match self.instance.get() {
            Some(db) => db.close().await,
            None => debug!("close requested before any connection was made"),
        }
    }
}

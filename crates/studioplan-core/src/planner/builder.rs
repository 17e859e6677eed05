//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Planner;
use crate::{
    backend::{LocalBackend, PlanBackend, RemoteBackend, RemoteConfig, SqliteSlots},
    error::{PlanError, Result},
};

/// Builder for creating and configuring Planner instances.
///
/// Backend selection happens once, in [`PlannerBuilder::build`]: when both a
/// remote URL and a remote key are configured (and non-blank) every
/// operation goes to the remote store, otherwise every operation goes to the
/// on-device store.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    remote_url: Option<String>,
    remote_key: Option<String>,
    table: Option<String>,
    backend: Option<Arc<dyn PlanBackend>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path for the on-device store.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studioplan/studioplan.db` or
    /// `~/.local/share/studioplan/studioplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the remote store URL and access key. Either may be missing or
    /// blank, in which case the on-device store is used.
    pub fn with_remote(mut self, url: Option<String>, key: Option<String>) -> Self {
        self.remote_url = url;
        self.remote_key = key;
        self
    }

    /// Overrides the remote table name (default `plans`).
    pub fn with_table(mut self, table: Option<String>) -> Self {
        self.table = table;
        self
    }

    /// Uses a ready-made backend, bypassing configuration-based selection.
    pub fn with_backend(mut self, backend: Arc<dyn PlanBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Returns the remote config when the remote store is fully configured.
    pub fn remote_config(&self) -> Option<RemoteConfig> {
        RemoteConfig::from_parts(
            self.remote_url.as_deref(),
            self.remote_key.as_deref(),
            self.table.as_deref(),
        )
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Configuration` if the remote client cannot be built
    /// Returns `PlanError::FileSystem` if the database path is invalid
    /// Returns `PlanError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        if let Some(backend) = self.backend {
            debug!("Using injected {} backend", backend.kind());
            return Ok(Planner::new(backend));
        }

        if let Some(config) = self.remote_config() {
            debug!("Using remote plan store at {}", config.endpoint());
            let backend = RemoteBackend::new(&config)?;
            return Ok(Planner::new(Arc::new(backend)));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        debug!("Using local plan store at {}", db_path.display());

        let slots = SqliteSlots::open(&db_path).await?;
        Ok(Planner::new(Arc::new(LocalBackend::new(slots))))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studioplan")
            .place_data_file("studioplan.db")
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }
}

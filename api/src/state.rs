//! Application state shared by all handlers

use crate::config::ServerConfig;
use crate::error::QuranError;
use crate::translate::{GoogleTranslator, Translator};
use crate::verses::VerseRepository;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Read-only store location plus the injected translation provider
pub struct AppState {
    pub db_path: PathBuf,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(db_path: PathBuf, translator: Arc<dyn Translator>) -> Self {
        Self { db_path, translator }
    }

    /// Build state from configuration, wiring in the Google provider
    pub fn from_config(config: &ServerConfig) -> Result<Self, QuranError> {
        let translator = GoogleTranslator::new(
            config.translate_endpoint.clone(),
            Duration::from_secs(config.translate_timeout_secs),
        )?;
        Ok(Self::new(config.database.clone(), Arc::new(translator)))
    }

    /// Open a fresh store handle (each call creates a new connection)
    pub fn open_repository(&self) -> Result<VerseRepository, QuranError> {
        VerseRepository::open(&self.db_path)
    }

    /// Run `f` against a request-scoped store handle on the blocking pool.
    ///
    /// The handle is opened inside the task and dropped when `f` returns,
    /// whether it succeeded or not.
    pub async fn with_repository<T, F>(self: &Arc<Self>, f: F) -> Result<T, QuranError>
    where
        T: Send + 'static,
        F: FnOnce(&VerseRepository) -> Result<T, QuranError> + Send + 'static,
    {
        let state = Arc::clone(self);
        tokio::task::spawn_blocking(move || {
            let repo = state.open_repository()?;
            f(&repo)
        })
        .await
        .map_err(|e| QuranError::Other(format!("Task join error: {}", e)))?
    }
}

//! # Application State
//!
//! Shared state for the Axum application, passed to every handler via the
//! `State` extractor. All dependencies are injected explicitly: the resource
//! registry and the Store capability are constructed at startup and shared
//! as read-only references. There are no package-level mutable handles.

use std::sync::Arc;

use ams_store::{MemoryStore, Store};

use crate::config::AppConfig;
use crate::registry::Registry;

/// Shared application state. Clone-friendly via `Arc` internals.
#[derive(Clone)]
pub struct AppState {
    /// The resource catalogue. Read-only after startup.
    pub registry: Arc<Registry>,
    /// The persistence capability.
    pub store: Arc<dyn Store>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// State over the given store with default configuration and the
    /// builtin resource catalogue.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_config(store, AppConfig::default())
    }

    /// State over the given store and configuration.
    pub fn with_config(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            registry: Arc::new(Registry::builtin()),
            store,
            config,
        }
    }

    /// State over a fresh in-memory store. The test and development default.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("resources", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

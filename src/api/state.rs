//! Application state for the shift ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::config::ConfigLoader;
use crate::error::{LedgerError, LedgerResult};
use crate::store::{DayStore, MemoryStore};

/// Shared application state.
///
/// Holds the loaded payroll configuration and the day store. The store
/// sits behind a single `RwLock`, matching the single-writer,
/// single-reader model: each user action runs to completion before the
/// next is processed.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<dyn DayStore>>,
}

impl AppState {
    /// Creates application state over a fresh in-memory store, seeded
    /// with the configuration's job profiles.
    pub fn new(config: ConfigLoader) -> LedgerResult<Self> {
        let mut store = MemoryStore::new();
        for job in config.jobs() {
            store.upsert_job(job)?;
        }
        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        })
    }

    /// Creates application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: Arc<RwLock<dyn DayStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Runs a closure with read access to the store.
    pub fn read_store<T>(
        &self,
        f: impl FnOnce(&dyn DayStore) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let guard = self.store.read().map_err(|_| LedgerError::Persistence {
            message: "day store lock poisoned".to_string(),
        })?;
        f(&*guard)
    }

    /// Runs a closure with write access to the store.
    pub fn write_store<T>(
        &self,
        f: impl FnOnce(&mut dyn DayStore) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut guard = self.store.write().map_err(|_| LedgerError::Persistence {
            message: "day store lock poisoned".to_string(),
        })?;
        f(&mut *guard)
    }
}

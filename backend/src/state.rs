//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::repositories::{HistoryRepository, InMemoryHistoryRepository};
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Water intake and calendar note storage
    pub history: Arc<dyn HistoryRepository>,
}

impl AppState {
    /// Create a new application state over the given history store
    pub fn new(config: AppConfig, history: Arc<dyn HistoryRepository>) -> Self {
        Self {
            config: Arc::new(config),
            history,
        }
    }

    /// State backed by a fresh in-memory history store
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, Arc::new(InMemoryHistoryRepository::new()))
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the history store
    #[inline]
    pub fn history(&self) -> &dyn HistoryRepository {
        self.history.as_ref()
    }
}

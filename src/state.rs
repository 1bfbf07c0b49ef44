//! Application state for qardboard.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::config;
use crate::services::{ListingService, QardClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Qard API client.
    pub qard: Arc<QardClient>,
    /// Company listing orchestrator.
    pub listing: ListingService,
}

impl AppState {
    /// Create a new application state, initializing all services.
    pub fn new() -> Self {
        let config = config::config();
        Self::with_client(Arc::new(QardClient::new(&config.qard)))
    }

    /// Build state around an existing client.
    ///
    /// Used by tests to point the service at a mock API.
    pub fn with_client(qard: Arc<QardClient>) -> Self {
        let listing = ListingService::new(qard.clone());
        Self { qard, listing }
    }
}

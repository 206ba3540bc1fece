//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::UserStore;
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
///
/// The user store is created here once per process and lives as
/// long as the last clone of the state.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Build the store and service stack from configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_default_user {
            UserStore::seeded(config.duplicate_id_policy)
        } else {
            UserStore::new(config.duplicate_id_policy)
        };

        tracing::debug!(
            seeded = config.seed_default_user,
            policy = %store.policy(),
            "User store initialized"
        );

        Self::new(Arc::new(UserManager::new(Arc::new(store))))
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

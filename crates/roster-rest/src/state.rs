//! Application state for Axum handlers.

use roster_service::{HealthService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub health_service: Arc<dyn HealthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            user_service,
            health_service,
        }
    }

    /// Creates application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService> + HasComponent<dyn HealthService>,
    {
        Self {
            user_service: module.resolve(),
            health_service: module.resolve(),
        }
    }
}

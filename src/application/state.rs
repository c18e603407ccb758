// src/application/state.rs
//
// Application state: the wired-up services handed to every command.

use std::sync::Arc;

use crate::db::{ConnectionProvider, StoreConfig};
use crate::repositories::{
    DishRepository, SqliteDishRepository, SqliteUserRepository, UserRepository,
};
use crate::services::{AuthService, DishService, ImportExportService};

/// All fields are Arc-wrapped so the state can be shared across threads.
pub struct AppState {
    pub connections: Arc<ConnectionProvider>,
    pub dish_service: Arc<DishService>,
    pub import_export_service: Arc<ImportExportService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wire repositories and services over one connection provider.
    ///
    /// Does not connect; the first command does.
    pub fn initialize(config: StoreConfig) -> Self {
        // 1. INFRASTRUCTURE
        let connections = Arc::new(ConnectionProvider::new(config));

        // 2. REPOSITORIES
        let dish_repo: Arc<dyn DishRepository> =
            Arc::new(SqliteDishRepository::new(connections.clone()));
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(connections.clone()));

        // 3. SERVICES
        let dish_service = Arc::new(DishService::new(dish_repo.clone()));
        let import_export_service = Arc::new(ImportExportService::new(dish_repo));
        let auth_service = Arc::new(AuthService::with_stored_credentials(user_repo));

        Self {
            connections,
            dish_service,
            import_export_service,
            auth_service,
        }
    }

    /// Close the store connection
    pub fn shutdown(&self) {
        self.connections.close();
    }
}

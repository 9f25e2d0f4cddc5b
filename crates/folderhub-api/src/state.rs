//! Application state shared across all handlers.

use std::sync::Arc;

use folderhub_core::config::AppConfig;
use folderhub_database::DatabasePool;
use folderhub_service::{
    AppServices, FolderService, OrganizationService, ProjectService, TreeService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Organization service
    pub organization_service: Arc<OrganizationService>,
    /// Folder tree service
    pub folder_service: Arc<FolderService>,
    /// Tree rendering service
    pub tree_service: Arc<TreeService>,
    /// Project service
    pub project_service: Arc<ProjectService>,
}

impl AppState {
    /// Wire every service over the given pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let services = AppServices::new(db.pool().clone(), config.tree.clone());
        Self {
            config: Arc::new(config),
            db,
            organization_service: services.organizations,
            folder_service: services.folders,
            tree_service: services.trees,
            project_service: services.projects,
        }
    }
}

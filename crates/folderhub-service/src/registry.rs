//! Wiring of every service over one pool.

use std::sync::Arc;

use sqlx::SqlitePool;

use folderhub_core::config::TreeConfig;

use crate::folder::{FolderService, OrganizationLocks, TreeService};
use crate::organization::OrganizationService;
use crate::project::ProjectService;

/// All services, sharing one pool and one organization lock table.
#[derive(Debug, Clone)]
pub struct AppServices {
    /// Organization service.
    pub organizations: Arc<OrganizationService>,
    /// Folder tree service.
    pub folders: Arc<FolderService>,
    /// Tree rendering service.
    pub trees: Arc<TreeService>,
    /// Project service.
    pub projects: Arc<ProjectService>,
}

impl AppServices {
    /// Build every service over `pool`.
    pub fn new(pool: SqlitePool, tree_config: TreeConfig) -> Self {
        let locks = Arc::new(OrganizationLocks::new());
        Self {
            organizations: Arc::new(OrganizationService::new(pool.clone())),
            folders: Arc::new(FolderService::new(pool.clone(), tree_config, locks)),
            trees: Arc::new(TreeService::new(pool.clone())),
            projects: Arc::new(ProjectService::new(pool)),
        }
    }
}

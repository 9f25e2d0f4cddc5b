//! Organization creation and lookup.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use folderhub_core::types::OrganizationId;
use folderhub_database::repositories::OrganizationRepository;
use folderhub_entity::organization::Organization;

use crate::error::{FolderTreeError, TreeResult, validate_name};

/// Manages organizations, the owners of folder forests.
#[derive(Debug, Clone)]
pub struct OrganizationService {
    /// Connection pool.
    pool: SqlitePool,
}

impl OrganizationService {
    /// Creates a new organization service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates an organization.
    pub async fn create_organization(&self, name: &str) -> TreeResult<Organization> {
        let name = validate_name(name, "Organization")?;

        let mut conn = self.pool.acquire().await?;
        let organization = OrganizationRepository::create(
            &mut conn,
            &Organization {
                id: OrganizationId::new(),
                name,
                created_at: Utc::now(),
            },
        )
        .await?;

        info!(
            organization_id = %organization.id,
            name = %organization.name,
            "Organization created"
        );

        Ok(organization)
    }

    /// Gets an organization by ID.
    pub async fn get_organization(&self, id: OrganizationId) -> TreeResult<Organization> {
        let mut conn = self.pool.acquire().await?;
        OrganizationRepository::find_by_id(&mut conn, id)
            .await?
            .ok_or(FolderTreeError::OrganizationNotFound(id))
    }

    /// Lists all organizations by name.
    pub async fn list_organizations(&self) -> TreeResult<Vec<Organization>> {
        let mut conn = self.pool.acquire().await?;
        Ok(OrganizationRepository::list(&mut conn).await?)
    }
}

//! Organization repository implementation.

use sqlx::SqliteConnection;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::types::OrganizationId;
use folderhub_entity::organization::Organization;

/// Organization lookups and inserts.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationRepository;

impl OrganizationRepository {
    /// Find an organization by ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: OrganizationId,
    ) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find organization", e)
            })
    }

    /// List all organizations by name.
    pub async fn list(conn: &mut SqliteConnection) -> AppResult<Vec<Organization>> {
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations ORDER BY name ASC, id ASC")
            .fetch_all(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list organizations", e)
            })
    }

    /// Insert an organization.
    pub async fn create(conn: &mut SqliteConnection, org: &Organization) -> AppResult<Organization> {
        sqlx::query_as::<_, Organization>(
            "INSERT INTO organizations (id, name, created_at) VALUES (?1, ?2, ?3) RETURNING *",
        )
        .bind(org.id)
        .bind(&org.name)
        .bind(org.created_at)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create organization", e))
    }
}

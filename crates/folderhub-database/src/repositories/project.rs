//! Project repository implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::types::{FolderId, OrganizationId, ProjectId};
use folderhub_entity::project::Project;

/// Project lookups and folder assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectRepository;

impl ProjectRepository {
    /// Find a project by ID.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: ProjectId) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// Insert a project.
    pub async fn create(conn: &mut SqliteConnection, project: &Project) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (id, organization_id, folder_id, name, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING *",
        )
        .bind(project.id)
        .bind(project.organization_id)
        .bind(project.folder_id)
        .bind(&project.name)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// File a project in `folder_id`, or unfile it with `None`.
    pub async fn set_folder(
        conn: &mut SqliteConnection,
        id: ProjectId,
        folder_id: Option<FolderId>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET folder_id = ?2, updated_at = ?3 WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(folder_id)
        .bind(now)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))
    }

    /// Projects filed directly in `folder_id` (or unfiled ones for `None`).
    pub async fn find_by_folder(
        conn: &mut SqliteConnection,
        organization_id: OrganizationId,
        folder_id: Option<FolderId>,
    ) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE organization_id = ?1 AND folder_id IS ?2 \
             ORDER BY name ASC, id ASC",
        )
        .bind(organization_id)
        .bind(folder_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Number of projects per folder across an organization.
    pub async fn count_by_folder(
        conn: &mut SqliteConnection,
        organization_id: OrganizationId,
    ) -> AppResult<HashMap<FolderId, u64>> {
        let rows: Vec<(FolderId, i64)> = sqlx::query_as(
            "SELECT folder_id, COUNT(*) FROM projects \
             WHERE organization_id = ?1 AND folder_id IS NOT NULL GROUP BY folder_id",
        )
        .bind(organization_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count projects", e))?;

        Ok(rows
            .into_iter()
            .map(|(folder_id, count)| (folder_id, count as u64))
            .collect())
    }
}

//! Project creation and folder assignment.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use folderhub_core::types::{FolderId, OrganizationId, ProjectId};
use folderhub_database::repositories::{
    FolderRepository, OrganizationRepository, ProjectRepository,
};
use folderhub_entity::project::Project;

use crate::error::{FolderTreeError, TreeResult, validate_name};

/// Files projects into folders of their own organization.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Connection pool.
    pool: SqlitePool,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Gets a project by ID.
    pub async fn get_project(&self, project_id: ProjectId) -> TreeResult<Project> {
        let mut conn = self.pool.acquire().await?;
        ProjectRepository::find_by_id(&mut conn, project_id)
            .await?
            .ok_or(FolderTreeError::ProjectNotFound(project_id))
    }

    /// Creates a project, optionally filed in a folder.
    pub async fn create_project(
        &self,
        organization_id: OrganizationId,
        name: &str,
        folder_id: Option<FolderId>,
    ) -> TreeResult<Project> {
        let name = validate_name(name, "Project")?;

        let mut conn = self.pool.acquire().await?;
        OrganizationRepository::find_by_id(&mut conn, organization_id)
            .await?
            .ok_or(FolderTreeError::OrganizationNotFound(organization_id))?;
        if let Some(fid) = folder_id {
            require_folder(&mut conn, organization_id, fid).await?;
        }

        let now = Utc::now();
        let project = ProjectRepository::create(
            &mut conn,
            &Project {
                id: ProjectId::new(),
                organization_id,
                folder_id,
                name,
                created_at: now,
                updated_at: now,
            },
        )
        .await?;

        info!(
            organization_id = %organization_id,
            project_id = %project.id,
            folder_id = ?project.folder_id,
            "Project created"
        );

        Ok(project)
    }

    /// Files a project in `folder_id`, or unfiles it with `None`.
    ///
    /// The folder must belong to the project's organization.
    pub async fn assign_folder(
        &self,
        project_id: ProjectId,
        folder_id: Option<FolderId>,
    ) -> TreeResult<Project> {
        let mut conn = self.pool.acquire().await?;
        let project = ProjectRepository::find_by_id(&mut conn, project_id)
            .await?
            .ok_or(FolderTreeError::ProjectNotFound(project_id))?;
        if let Some(fid) = folder_id {
            require_folder(&mut conn, project.organization_id, fid).await?;
        }

        let project = ProjectRepository::set_folder(&mut conn, project_id, folder_id, Utc::now())
            .await?
            .ok_or(FolderTreeError::ProjectNotFound(project_id))?;

        info!(project_id = %project_id, folder_id = ?folder_id, "Project filed");

        Ok(project)
    }

    /// Lists projects filed directly in `folder_id`, or unfiled projects
    /// when `None`.
    pub async fn list_projects(
        &self,
        organization_id: OrganizationId,
        folder_id: Option<FolderId>,
    ) -> TreeResult<Vec<Project>> {
        let mut conn = self.pool.acquire().await?;
        OrganizationRepository::find_by_id(&mut conn, organization_id)
            .await?
            .ok_or(FolderTreeError::OrganizationNotFound(organization_id))?;

        Ok(ProjectRepository::find_by_folder(&mut conn, organization_id, folder_id).await?)
    }
}

async fn require_folder(
    conn: &mut SqliteConnection,
    organization_id: OrganizationId,
    folder_id: FolderId,
) -> TreeResult<()> {
    FolderRepository::find_in_organization(conn, organization_id, folder_id)
        .await?
        .ok_or(FolderTreeError::FolderNotFound(folder_id))?;
    Ok(())
}

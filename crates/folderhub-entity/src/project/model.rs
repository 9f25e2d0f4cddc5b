//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folderhub_core::types::{FolderId, OrganizationId, ProjectId};

/// A project, optionally filed in a folder of its organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// The owning organization.
    pub organization_id: OrganizationId,
    /// Folder the project is filed in, if any.
    pub folder_id: Option<FolderId>,
    /// Project name.
    pub name: String,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether the project sits outside any folder.
    pub fn is_unfiled(&self) -> bool {
        self.folder_id.is_none()
    }
}

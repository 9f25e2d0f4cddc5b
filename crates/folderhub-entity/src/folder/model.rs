//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folderhub_core::types::{FolderId, OrganizationId};

use super::path::{FolderPath, PathError};

/// A folder in an organization's tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The organization that owns this folder.
    pub organization_id: OrganizationId,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Materialized path of folder ids (e.g. `/<root-id>/<this-id>`).
    pub path: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Parse the stored path.
    pub fn folder_path(&self) -> Result<FolderPath, PathError> {
        self.path.parse()
    }

    /// Number of id segments in the stored path.
    pub fn depth(&self) -> usize {
        self.path.split('/').filter(|s| !s.is_empty()).count()
    }
}

/// Data required to insert a folder row.
///
/// The id and path are computed by the tree service before insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Pre-generated folder id (the last path segment).
    pub id: FolderId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Materialized path.
    pub path: FolderPath,
}

//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_entity::folder::Folder;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Folder with its computed depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    /// Folder ID.
    pub id: FolderId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Parent folder, null for roots.
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Materialized path.
    pub path: String,
    /// Number of path segments.
    pub depth: usize,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            depth: folder.depth(),
            id: folder.id,
            organization_id: folder.organization_id,
            parent_id: folder.parent_id,
            name: folder.name,
            path: folder.path,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

/// Convert a folder list for output.
pub fn folder_list(folders: Vec<Folder>) -> Vec<FolderResponse> {
    folders.into_iter().map(FolderResponse::from).collect()
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

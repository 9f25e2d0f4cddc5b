//! Errors raised by the folder tree and the services built around it.

use thiserror::Error;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::types::{FolderId, OrganizationId, ProjectId};
use folderhub_entity::folder::PathError;

/// Result alias for service operations.
pub type TreeResult<T> = Result<T, FolderTreeError>;

/// Every way a folder tree operation can fail.
///
/// Errors are returned as-is and never retried internally.
#[derive(Debug, Error)]
pub enum FolderTreeError {
    /// The referenced parent does not exist or belongs to another organization.
    #[error("Parent folder {0} not found")]
    ParentNotFound(FolderId),

    /// The folder being operated on does not exist.
    #[error("Folder {0} not found")]
    FolderNotFound(FolderId),

    /// The organization does not exist.
    #[error("Organization {0} not found")]
    OrganizationNotFound(OrganizationId),

    /// The project does not exist.
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    /// The folder would sit deeper than the configured maximum.
    #[error("Folder depth {depth} exceeds the maximum of {max_depth}")]
    MaxDepthExceeded {
        /// Path depth the operation would produce.
        depth: usize,
        /// Configured maximum.
        max_depth: usize,
    },

    /// The move would make the folder its own ancestor.
    #[error("Cannot move folder {folder_id} into {target_id}, which is the folder itself or one of its descendants")]
    InvalidMove {
        /// Folder being moved.
        folder_id: FolderId,
        /// Requested new parent.
        target_id: FolderId,
    },

    /// The folder still has subfolders and cannot be deleted.
    #[error("Folder {0} still contains subfolders")]
    FolderNotEmpty(FolderId),

    /// Caller input was rejected.
    #[error("{0}")]
    Validation(String),

    /// A stored path could not be parsed.
    #[error("Folder {folder_id} has a corrupt path: {source}")]
    CorruptPath {
        /// Folder carrying the bad path.
        folder_id: FolderId,
        /// Parse failure.
        #[source]
        source: PathError,
    },

    /// The underlying store rejected a read or write.
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl FolderTreeError {
    /// Wrap a raw sqlx error (transaction begin/commit) as a storage failure.
    pub fn storage(context: &str, err: sqlx::Error) -> Self {
        Self::Storage(AppError::with_source(
            ErrorKind::Database,
            format!("{context}: {err}"),
            err,
        ))
    }
}

impl From<sqlx::Error> for FolderTreeError {
    fn from(err: sqlx::Error) -> Self {
        Self::storage("Database error", err)
    }
}

impl From<FolderTreeError> for AppError {
    fn from(err: FolderTreeError) -> Self {
        match err {
            FolderTreeError::Storage(inner) => inner,
            FolderTreeError::ParentNotFound(_)
            | FolderTreeError::FolderNotFound(_)
            | FolderTreeError::OrganizationNotFound(_)
            | FolderTreeError::ProjectNotFound(_) => AppError::not_found(err.to_string()),
            FolderTreeError::MaxDepthExceeded { .. }
            | FolderTreeError::InvalidMove { .. }
            | FolderTreeError::Validation(_) => AppError::validation(err.to_string()),
            FolderTreeError::FolderNotEmpty(_) => AppError::conflict(err.to_string()),
            FolderTreeError::CorruptPath { .. } => {
                AppError::with_source(ErrorKind::Internal, "Folder tree is inconsistent", err)
            }
        }
    }
}

/// Trim and validate a folder or project name.
pub(crate) fn validate_name(name: &str, what: &str) -> TreeResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FolderTreeError::Validation(format!("{what} name cannot be empty")));
    }
    if trimmed.chars().count() > 255 {
        return Err(FolderTreeError::Validation(format!(
            "{what} name cannot exceed 255 characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_app_errors() {
        let not_found: AppError = FolderTreeError::ParentNotFound(FolderId::new()).into();
        assert_eq!(not_found.kind, ErrorKind::NotFound);

        let depth: AppError = FolderTreeError::MaxDepthExceeded {
            depth: 5,
            max_depth: 4,
        }
        .into();
        assert_eq!(depth.kind, ErrorKind::Validation);

        let busy: AppError = FolderTreeError::FolderNotEmpty(FolderId::new()).into();
        assert_eq!(busy.kind, ErrorKind::Conflict);

        let storage: AppError = FolderTreeError::Storage(AppError::database("disk I/O")).into();
        assert_eq!(storage.kind, ErrorKind::Database);
    }

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Docs ", "Folder").expect("valid"), "Docs");
        assert!(matches!(
            validate_name("   ", "Folder"),
            Err(FolderTreeError::Validation(_))
        ));
        assert!(validate_name(&"x".repeat(256), "Folder").is_err());
    }
}

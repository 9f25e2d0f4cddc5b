//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use folderhub_core::types::FolderId;

use crate::error::ApiError;

/// Run `validator` rules and convert failures to a validation error.
pub fn validate<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|e| folderhub_core::AppError::validation(e.to_string()).into())
}

/// Create organization request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    /// Organization name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    /// Parent folder (omit or null for a root folder).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

/// Rename folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Move folder request.
///
/// `new_parent_id` must be present; an explicit null moves the folder to the
/// root level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveFolderRequest {
    /// New parent folder, or null for the root level.
    #[serde(deserialize_with = "required_nullable")]
    pub new_parent_id: Option<FolderId>,
}

/// Deserialize an `Option` field that must be present even when null.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Create project request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    /// Folder to file the project in.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
}

/// File (or unfile) a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignProjectFolderRequest {
    /// Target folder; null unfiles the project.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
}

/// Query for folder listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFoldersQuery {
    /// List children of this folder; roots when absent.
    pub parent_id: Option<FolderId>,
}

/// Query for project listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjectsQuery {
    /// List projects in this folder; unfiled ones when absent.
    pub folder_id: Option<FolderId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_accepts_explicit_null_parent() {
        let null: MoveFolderRequest =
            serde_json::from_str(r#"{"new_parent_id": null}"#).expect("null parent");
        assert!(null.new_parent_id.is_none());
    }

    #[test]
    fn test_move_request_requires_new_parent_field() {
        assert!(serde_json::from_str::<MoveFolderRequest>("{}").is_err());
    }

    #[test]
    fn test_move_request_rejects_unknown_fields() {
        let body = format!(r#"{{"parent_id": "{}"}}"#, FolderId::new());
        assert!(serde_json::from_str::<MoveFolderRequest>(&body).is_err());

        let body = format!(
            r#"{{"new_parent_id": null, "parent_id": "{}"}}"#,
            FolderId::new()
        );
        assert!(serde_json::from_str::<MoveFolderRequest>(&body).is_err());
    }

    #[test]
    fn test_empty_folder_name_fails_validation() {
        let req = CreateFolderRequest {
            name: String::new(),
            parent_id: None,
        };
        assert!(validate(&req).is_err());
    }
}

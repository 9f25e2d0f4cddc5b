//! Folder tree handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_entity::folder::{FolderNode, FolderTree};

use crate::dto::request::{
    CreateFolderRequest, ListFoldersQuery, MoveFolderRequest, RenameFolderRequest, validate,
};
use crate::dto::response::{ApiResponse, FolderResponse, MessageResponse, folder_list};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/organizations/{org_id}/folders?parent_id=...
///
/// Root folders when `parent_id` is absent.
pub async fn list_folders(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
    Query(query): Query<ListFoldersQuery>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, ApiError> {
    let folders = state
        .folder_service
        .find_children(org_id, query.parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(folder_list(folders))))
}

/// POST /api/organizations/{org_id}/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FolderResponse>>), ApiError> {
    validate(&req)?;
    let folder = state
        .folder_service
        .create_folder(org_id, &req.name, req.parent_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder.into()))))
}

/// GET /api/organizations/{org_id}/tree
pub async fn get_forest(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
) -> Result<Json<ApiResponse<FolderTree>>, ApiError> {
    let forest = state.tree_service.get_forest(org_id).await?;
    Ok(Json(ApiResponse::ok(forest)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    let folder = state.folder_service.get_folder(id).await?;
    Ok(Json(ApiResponse::ok(folder.into())))
}

/// PATCH /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    validate(&req)?;
    let folder = state.folder_service.rename_folder(id, &req.name).await?;
    Ok(Json(ApiResponse::ok(folder.into())))
}

/// PUT /api/folders/{id}/move
pub async fn move_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
    Json(req): Json<MoveFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    let folder = state
        .folder_service
        .move_folder(id, req.new_parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(folder.into())))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.folder_service.delete_folder(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Folder deleted".to_string(),
    })))
}

/// GET /api/folders/{id}/descendants
pub async fn list_descendants(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, ApiError> {
    let folders = state.folder_service.find_all_descendants(id).await?;
    Ok(Json(ApiResponse::ok(folder_list(folders))))
}

/// GET /api/folders/{id}/ancestors
///
/// Root first.
pub async fn list_ancestors(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, ApiError> {
    let folders = state.folder_service.find_ancestors(id).await?;
    Ok(Json(ApiResponse::ok(folder_list(folders))))
}

/// GET /api/folders/{id}/breadcrumbs
pub async fn get_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, ApiError> {
    let folders = state.tree_service.get_breadcrumbs(id).await?;
    Ok(Json(ApiResponse::ok(folder_list(folders))))
}

/// GET /api/folders/{id}/tree
pub async fn get_tree(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<FolderNode>>, ApiError> {
    let tree = state.tree_service.get_tree(id).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

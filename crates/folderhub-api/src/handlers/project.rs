//! Project handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use folderhub_core::types::{OrganizationId, ProjectId};
use folderhub_entity::project::Project;

use crate::dto::request::{
    AssignProjectFolderRequest, CreateProjectRequest, ListProjectsQuery, validate,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/organizations/{org_id}/projects
pub async fn create_project(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    validate(&req)?;
    let project = state
        .project_service
        .create_project(org_id, &req.name, req.folder_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// GET /api/organizations/{org_id}/projects?folder_id=...
///
/// Unfiled projects when `folder_id` is absent.
pub async fn list_projects(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state
        .project_service
        .list_projects(org_id, query.folder_id)
        .await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.project_service.get_project(id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PUT /api/projects/{id}/folder
pub async fn assign_folder(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    Json(req): Json<AssignProjectFolderRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state
        .project_service
        .assign_folder(id, req.folder_id)
        .await?;
    Ok(Json(ApiResponse::ok(project)))
}

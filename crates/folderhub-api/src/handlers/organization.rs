//! Organization handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use folderhub_core::types::OrganizationId;
use folderhub_entity::organization::Organization;

use crate::dto::request::{CreateOrganizationRequest, validate};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/organizations
pub async fn create_organization(
    State(state): State<AppState>,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Organization>>), ApiError> {
    validate(&req)?;
    let organization = state
        .organization_service
        .create_organization(&req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(organization))))
}

/// GET /api/organizations
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Organization>>>, ApiError> {
    let organizations = state.organization_service.list_organizations().await?;
    Ok(Json(ApiResponse::ok(organizations)))
}

/// GET /api/organizations/{org_id}
pub async fn get_organization(
    State(state): State<AppState>,
    Path(org_id): Path<OrganizationId>,
) -> Result<Json<ApiResponse<Organization>>, ApiError> {
    let organization = state.organization_service.get_organization(org_id).await?;
    Ok(Json(ApiResponse::ok(organization)))
}

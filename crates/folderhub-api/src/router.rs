//! Route definitions for the FolderHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(organization_routes())
        .merge(folder_routes())
        .merge(project_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Organizations and the folders and projects scoped to them
fn organization_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations",
            get(handlers::organization::list_organizations)
                .post(handlers::organization::create_organization),
        )
        .route(
            "/organizations/{org_id}",
            get(handlers::organization::get_organization),
        )
        .route(
            "/organizations/{org_id}/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/organizations/{org_id}/tree",
            get(handlers::folder::get_forest),
        )
        .route(
            "/organizations/{org_id}/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )
}

/// Folder lookup, rename, move, delete and tree queries
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders/{id}",
            get(handlers::folder::get_folder)
                .patch(handlers::folder::rename_folder)
                .delete(handlers::folder::delete_folder),
        )
        .route("/folders/{id}/move", put(handlers::folder::move_folder))
        .route(
            "/folders/{id}/descendants",
            get(handlers::folder::list_descendants),
        )
        .route(
            "/folders/{id}/ancestors",
            get(handlers::folder::list_ancestors),
        )
        .route(
            "/folders/{id}/breadcrumbs",
            get(handlers::folder::get_breadcrumbs),
        )
        .route("/folders/{id}/tree", get(handlers::folder::get_tree))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{id}", get(handlers::project::get_project))
        .route("/projects/{id}/folder", put(handlers::project::assign_folder))
}

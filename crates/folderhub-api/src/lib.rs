//! # folderhub-api
//!
//! HTTP API layer for FolderHub built on Axum.
//!
//! Provides the REST endpoints for organizations, folders and projects,
//! middleware (request logging, CORS, compression), DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;

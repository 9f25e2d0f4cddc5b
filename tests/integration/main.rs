//! HTTP integration tests against an in-memory database.

mod folder_test;
mod helpers;
mod organization_test;
mod project_test;

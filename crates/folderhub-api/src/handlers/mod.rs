//! HTTP request handlers.

pub mod folder;
pub mod health;
pub mod organization;
pub mod project;

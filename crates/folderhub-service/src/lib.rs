//! # folderhub-service
//!
//! Business logic layer for FolderHub. Services own the connection pool,
//! decide transaction scope, and hand explicit connections down to the
//! stateless repositories in `folderhub-database`.
//!
//! Services follow constructor injection: the pool and configuration are
//! provided at construction time.

pub mod error;
pub mod folder;
pub mod organization;
pub mod project;
pub mod registry;

pub use error::{FolderTreeError, TreeResult};
pub use folder::{FolderService, OrganizationLocks, TreeService};
pub use organization::OrganizationService;
pub use project::ProjectService;
pub use registry::AppServices;
